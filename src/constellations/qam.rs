//! Gray-labeled square M-QAM
//!
//! The label splits into an in-phase half (upper bits) and a quadrature
//! half (lower bits); each half is an independent Gray PAM.

use num_complex::Complex64;

use super::pam::gray_pam;
use crate::error::{LlrError, LlrResult};
use crate::utils::bits_per_symbol;

/// Build a square M-QAM constellation (M = 4, 16, 64, ...)
pub fn gray_qam(order: usize) -> LlrResult<Vec<Complex64>> {
    if order < 2 || !order.is_power_of_two() {
        return Err(LlrError::OrderNotPowerOfTwo(order));
    }

    let m = bits_per_symbol(order);
    if m % 2 != 0 {
        return Err(LlrError::NotSquare(order));
    }

    let half = m / 2;
    let side = gray_pam(1 << half)?;
    let mask = (1 << half) - 1;

    Ok((0..order)
        .map(|label| Complex64::new(side[label >> half], side[label & mask]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qpsk_layout() {
        let qpsk = gray_qam(4).unwrap();
        assert_eq!(qpsk[0], Complex64::new(-1.0, -1.0));
        assert_eq!(qpsk[1], Complex64::new(-1.0, 1.0));
        assert_eq!(qpsk[2], Complex64::new(1.0, -1.0));
        assert_eq!(qpsk[3], Complex64::new(1.0, 1.0));
    }

    #[test]
    fn test_qam16_nearest_neighbours_differ_in_one_bit() {
        let qam = gray_qam(16).unwrap();

        for a in 0..16 {
            for b in (a + 1)..16 {
                // Nearest neighbours on the integer grid are 2 apart
                let d = (qam[a] - qam[b]).norm_sqr();
                if (d - 4.0).abs() < 1e-9 {
                    assert_eq!((a ^ b).count_ones(), 1, "labels {} and {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_qam64_unique_points() {
        let qam = gray_qam(64).unwrap();
        for a in 0..64 {
            for b in (a + 1)..64 {
                assert!((qam[a] - qam[b]).norm_sqr() > 1.0);
            }
        }
    }

    #[test]
    fn test_non_square_rejected() {
        assert_eq!(gray_qam(8), Err(LlrError::NotSquare(8)));
        assert_eq!(gray_qam(32), Err(LlrError::NotSquare(32)));
        assert_eq!(gray_qam(12), Err(LlrError::OrderNotPowerOfTwo(12)));
    }
}
