//! Constellation trait - label/index bookkeeping over a point slice
//!
//! A constellation is just an ordered slice of points. Index order is the
//! Gray labeling order: the m-bit binary form of index i is point i's label.

use super::ConstellationPoint;

/// Slice-level view of a Gray-labeled constellation
pub trait Constellation {
    /// Point type (`f64` for PAM, `Complex64` for QAM)
    type Point: ConstellationPoint;

    /// Number of points (M)
    fn order(&self) -> usize;

    /// Bits per symbol (log2 of order)
    fn bits_per_symbol(&self) -> usize {
        crate::utils::bits_per_symbol(self.order())
    }

    /// Index of the nearest point (hard decision)
    fn nearest_index(&self, y: &Self::Point) -> usize;
}

impl<P: ConstellationPoint> Constellation for [P] {
    type Point = P;

    fn order(&self) -> usize {
        self.len()
    }

    fn nearest_index(&self, y: &P) -> usize {
        // Minimum Euclidean distance
        let mut best_idx = 0;
        let mut best_dist = f64::MAX;

        for (idx, c) in self.iter().enumerate() {
            let dist = y.dist_sq(c);
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }

        best_idx
    }
}
