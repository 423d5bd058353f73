//! Constellation point trait - the geometry the LLR kernel needs

use num_complex::Complex64;

/// A point in signal space
///
/// The kernel only ever needs squared magnitudes and squared Euclidean
/// distances, so that is all a point has to provide.
pub trait ConstellationPoint: Copy + Send + Sync {
    /// Squared magnitude |p|²
    fn energy(&self) -> f64;

    /// Squared Euclidean distance |self - other|²
    fn dist_sq(&self, other: &Self) -> f64;

    /// Scale the point by a real factor
    fn scaled(&self, k: f64) -> Self;
}

impl ConstellationPoint for f64 {
    #[inline]
    fn energy(&self) -> f64 {
        self * self
    }

    #[inline]
    fn dist_sq(&self, other: &Self) -> f64 {
        let d = self - other;
        d * d
    }

    #[inline]
    fn scaled(&self, k: f64) -> Self {
        self * k
    }
}

impl ConstellationPoint for Complex64 {
    #[inline]
    fn energy(&self) -> f64 {
        self.norm_sqr()
    }

    #[inline]
    fn dist_sq(&self, other: &Self) -> f64 {
        (self - other).norm_sqr()
    }

    #[inline]
    fn scaled(&self, k: f64) -> Self {
        self * k
    }
}
