//! AWGN channel for Monte-Carlo runs

mod noise;

pub use noise::NoiseGenerator;
