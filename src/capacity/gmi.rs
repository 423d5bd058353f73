//! Bit-wise generalized mutual information
//!
//! GMI = H(X) − Σ_b E[ log2(1 + exp(−s_b·λ_b)) ], s_b = ±1 for the
//! transmitted bit. With prior-weighted LLRs this is the rate of a
//! bit-metric decoder with probabilistic shaping; with a uniform prior
//! H(X) = m.

use std::f64::consts::LN_2;

use crate::constellations::label_bit;
use crate::error::{LlrError, LlrResult};
use crate::utils::softplus;

/// Entropy of a prior mass function in bits (zero entries skipped)
pub fn entropy_bits(pk: &[f64]) -> f64 {
    pk.iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

fn check_lengths(llrs: &[f64], tx: &[usize], m: usize) -> LlrResult<()> {
    if llrs.len() != tx.len() * m {
        return Err(LlrError::LengthMismatch {
            what: "llrs",
            expected: tx.len() * m,
            actual: llrs.len(),
        });
    }
    Ok(())
}

/// Estimate the bit-wise GMI from LLRs and the transmitted labels
///
/// # Arguments
/// * `llrs` - Ns·m LLRs, symbol-major
/// * `tx` - Transmitted point indices (labels), Ns
/// * `m` - Bits per symbol
/// * `entropy` - H(X) in bits (m for a uniform prior)
///
/// An empty block carries no evidence and returns `entropy`.
pub fn gmi(llrs: &[f64], tx: &[usize], m: usize, entropy: f64) -> LlrResult<f64> {
    check_lengths(llrs, tx, m)?;
    if tx.is_empty() || m == 0 {
        return Ok(entropy);
    }

    let loss: f64 = llrs
        .chunks_exact(m)
        .zip(tx)
        .map(|(chunk, &label)| {
            chunk
                .iter()
                .enumerate()
                .map(|(b, &l)| {
                    let s = if label_bit(label, b, m) { 1.0 } else { -1.0 };
                    softplus(-s * l)
                })
                .sum::<f64>()
        })
        .sum();

    Ok(entropy - loss / (LN_2 * tx.len() as f64))
}

/// Fraction of hard decisions (sign of the LLR) that disagree with `tx`
///
/// A zero LLR counts as a decision for 0.
pub fn bit_error_rate(llrs: &[f64], tx: &[usize], m: usize) -> LlrResult<f64> {
    check_lengths(llrs, tx, m)?;
    if llrs.is_empty() {
        return Ok(0.0);
    }

    let errors = llrs
        .chunks_exact(m)
        .zip(tx)
        .flat_map(|(chunk, &label)| {
            chunk
                .iter()
                .enumerate()
                .map(move |(b, &l)| (l > 0.0) != label_bit(label, b, m))
        })
        .filter(|&wrong| wrong)
        .count();

    Ok(errors as f64 / llrs.len() as f64)
}
