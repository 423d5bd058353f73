//! Utility functions for the demapper

mod math;

pub use math::*;
