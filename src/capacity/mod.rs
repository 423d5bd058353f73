//! Achievable-rate estimation from LLRs
//!
//! The bit-wise GMI is what a bit-metric decoder can reach with the LLRs
//! produced by `demod`. `montecarlo` wires the builders, the AWGN source
//! and the decoders together to estimate it at a given SNR.

mod gmi;
mod montecarlo;

pub use gmi::{bit_error_rate, entropy_bits, gmi};
pub use montecarlo::{simulate_pam, simulate_qam, SimParams, SimResult};
