//! Shared LLR kernel
//!
//! Per received sample y:
//! 1. metric[c] = ln pk[c] − |y − c|² / (2σ²)   (one pass over the points)
//! 2. for each bit b, split the metrics by label bit and take
//!    LLR(b) = LSE(metrics with bit=1) − LSE(metrics with bit=0)
//!
//! LSE is the max-subtracted log-sum-exp. Exponentiating the raw metrics
//! overflows/underflows at high SNR, so it is never done.
//!
//! Samples are independent. With the `parallel` feature each sample (all m
//! of its LLRs) is one rayon task writing its own output chunk.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::traits::ConstellationPoint;

// ============================================================================
// Noise model
// ============================================================================

/// How the Gaussian noise level is supplied
#[derive(Debug, Clone, Copy)]
pub enum NoiseModel<'a> {
    /// One standard deviation for every sample (PAM path)
    SharedSigma(f64),
    /// One variance per received sample (QAM path)
    PerSampleVariance(&'a [f64]),
}

impl NoiseModel<'_> {
    /// 1 / (2σ²) for sample `n`
    #[inline]
    fn inv_two_var(&self, n: usize) -> f64 {
        match *self {
            NoiseModel::SharedSigma(sigma) => 0.5 / (sigma * sigma),
            NoiseModel::PerSampleVariance(var) => 0.5 / var[n],
        }
    }
}

// ============================================================================
// Per-sample computation
// ============================================================================

/// Max-subtracted ln Σ exp over the metrics whose label bit equals `want`
#[inline]
fn partition_lse(metrics: &[f64], shift: usize, want: usize) -> f64 {
    let max = metrics
        .iter()
        .enumerate()
        .filter(|(idx, _)| (idx >> shift) & 1 == want)
        .map(|(_, &v)| v)
        .fold(f64::NEG_INFINITY, f64::max);

    // Every point in the partition has zero prior
    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }

    let sum: f64 = metrics
        .iter()
        .enumerate()
        .filter(|&(idx, &v)| (idx >> shift) & 1 == want && v != f64::NEG_INFINITY)
        .map(|(_, &v)| (v - max).exp())
        .sum();

    max + sum.ln()
}

/// Fill `out` (length m) with the LLRs of one received sample
#[inline]
fn sample_llrs<P: ConstellationPoint>(
    y: &P,
    points: &[P],
    log_prior: Option<&[f64]>,
    inv_two_var: f64,
    metrics: &mut [f64],
    out: &mut [f64],
) {
    match log_prior {
        Some(lp) => {
            for ((metric, c), &l) in metrics.iter_mut().zip(points).zip(lp) {
                *metric = l - y.dist_sq(c) * inv_two_var;
            }
        }
        None => {
            for (metric, c) in metrics.iter_mut().zip(points) {
                *metric = -y.dist_sq(c) * inv_two_var;
            }
        }
    }

    let m = out.len();
    for (bit, llr) in out.iter_mut().enumerate() {
        let shift = m - 1 - bit;
        *llr = partition_lse(metrics, shift, 1) - partition_lse(metrics, shift, 0);
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Decode every sample of `y` into `out` (length `y.len() * m`)
///
/// `log_prior` of `None` means a uniform prior; the constant cancels in the
/// ratio so it is simply left out.
pub(crate) fn decode_into<P: ConstellationPoint>(
    y: &[P],
    points: &[P],
    log_prior: Option<&[f64]>,
    noise: NoiseModel<'_>,
    out: &mut [f64],
) {
    let m = crate::utils::bits_per_symbol(points.len());
    debug_assert_eq!(out.len(), y.len() * m, "LLR buffer must hold Ns·m values");

    log::trace!(
        "soft decode: order={} bits={} samples={}",
        points.len(),
        m,
        y.len()
    );

    // A single-point constellation carries no bits
    if m == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        out.par_chunks_mut(m)
            .zip(y.par_iter())
            .enumerate()
            .for_each_init(
                || vec![0.0; points.len()],
                |metrics, (n, (chunk, y))| {
                    sample_llrs(y, points, log_prior, noise.inv_two_var(n), metrics, chunk);
                },
            );
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut metrics = vec![0.0; points.len()];
        for (n, (chunk, y)) in out.chunks_mut(m).zip(y).enumerate() {
            sample_llrs(y, points, log_prior, noise.inv_two_var(n), &mut metrics, chunk);
        }
    }
}
