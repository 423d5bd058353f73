//! Soft LLR - bit-wise soft demapping for Gray-labeled PAM/QAM over AWGN
//!
//! Given a constellation (index order = Gray label), a noise level and, for
//! QAM, a prior over the points, compute one log-likelihood ratio per label
//! bit per received sample. Output is symbol-major, bit 0 = label MSB, and
//! positive LLRs favour a 1.
//!
//! The decoders trust their inputs (power-of-two order, σ > 0, priors that
//! sum to one, matching lengths). Checking those is the caller's job.

pub mod capacity;
pub mod channel;
pub mod constellations;
pub mod demod;
pub mod error;
pub mod traits;
mod utils;

// Re-export core types for convenience
pub use capacity::{simulate_pam, simulate_qam, SimParams, SimResult};
pub use channel::NoiseGenerator;
pub use constellations::{gray_pam, gray_qam, normalize_energy};
pub use demod::{
    pam_llr, pam_llr_from_snr, pam_soft_decode, qam_llr, qam_soft_decode, sigma_from_snr_db,
    symbol_energy, uniform_prior,
};
pub use error::{LlrError, LlrResult};
pub use traits::{Constellation, ConstellationPoint};

pub use num_complex::Complex64;
