//! PAM soft decoder
//!
//! Real constellation, one noise σ shared by all samples, uniform prior.

use super::energy::{sigma_from_snr_db, symbol_energy, uniform_prior};
use super::kernel::{decode_into, NoiseModel};
use crate::traits::Constellation;

/// Compute LLRs for M-PAM into a caller-provided buffer
///
/// # Arguments
/// * `y` - Received real samples (Ns)
/// * `points` - Constellation in Gray-label order (M, power of two)
/// * `sigma` - Noise standard deviation, must be > 0
/// * `llr` - Output, Ns·log2(M) values, symbol-major
pub fn pam_soft_decode(y: &[f64], points: &[f64], sigma: f64, llr: &mut [f64]) {
    decode_into(y, points, None, NoiseModel::SharedSigma(sigma), llr);
}

/// Compute LLRs for M-PAM, allocating the output
pub fn pam_llr(y: &[f64], points: &[f64], sigma: f64) -> Vec<f64> {
    let mut llr = vec![0.0; y.len() * points.bits_per_symbol()];
    pam_soft_decode(y, points, sigma, &mut llr);
    llr
}

/// Compute LLRs for M-PAM at a given SNR (dB)
///
/// σ is derived from the constellation's mean energy under a uniform prior.
pub fn pam_llr_from_snr(y: &[f64], points: &[f64], snr_db: f64) -> Vec<f64> {
    let es = symbol_energy(points, &uniform_prior(points.len()));
    pam_llr(y, points, sigma_from_snr_db(es, snr_db))
}
