//! QAM soft decoder
//!
//! Complex constellation, one noise variance per received sample, and an
//! arbitrary prior over the points. Zero-prior points drop out of both
//! partitions (ln 0 = −∞ is skipped by the kernel).

use num_complex::Complex64;

use super::kernel::{decode_into, NoiseModel};
use crate::traits::Constellation;

/// Compute LLRs for M-QAM into a caller-provided buffer
///
/// # Arguments
/// * `y` - Received complex samples (Ns)
/// * `points` - Constellation in Gray-label order (M, power of two)
/// * `pk` - Prior probability of each point (M, sums to one)
/// * `variance` - Complex noise variance of each received sample (Ns, > 0)
/// * `llr` - Output, Ns·log2(M) values, symbol-major
pub fn qam_soft_decode(
    y: &[Complex64],
    points: &[Complex64],
    pk: &[f64],
    variance: &[f64],
    llr: &mut [f64],
) {
    debug_assert_eq!(pk.len(), points.len());
    debug_assert_eq!(variance.len(), y.len());

    let log_prior: Vec<f64> = pk.iter().map(|p| p.ln()).collect();
    decode_into(
        y,
        points,
        Some(&log_prior),
        NoiseModel::PerSampleVariance(variance),
        llr,
    );
}

/// Compute LLRs for M-QAM, allocating the output
pub fn qam_llr(y: &[Complex64], points: &[Complex64], pk: &[f64], variance: &[f64]) -> Vec<f64> {
    let mut llr = vec![0.0; y.len() * points.bits_per_symbol()];
    qam_soft_decode(y, points, pk, variance, &mut llr);
    llr
}
