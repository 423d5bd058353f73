//! Small numeric helpers

/// Convert an amplitude ratio in dB to linear scale (20·log10 convention)
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert a power ratio in dB to linear scale (10·log10 convention)
#[inline]
pub fn db_to_power(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// log2 of a constellation order, truncated
///
/// An order of 1 (or 0) carries no bits.
#[inline]
pub fn bits_per_symbol(order: usize) -> usize {
    if order <= 1 {
        0
    } else {
        order.ilog2() as usize
    }
}

/// Numerically stable ln(1 + e^x)
#[inline]
pub fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}
