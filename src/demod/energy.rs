//! Symbol energy estimation and SNR → σ conversion

use crate::traits::ConstellationPoint;
use crate::utils::db_to_linear;

/// Expected squared magnitude of a transmitted symbol: Σ |c_i|² · pk_i
///
/// `pk` is assumed to sum to one; that is not checked here.
pub fn symbol_energy<P: ConstellationPoint>(points: &[P], pk: &[f64]) -> f64 {
    points
        .iter()
        .zip(pk)
        .map(|(c, &p)| c.energy() * p)
        .sum()
}

/// Noise standard deviation for a given symbol energy and SNR in dB
///
/// σ = sqrt(Es) · 10^(−SNR/20)
#[inline]
pub fn sigma_from_snr_db(energy: f64, snr_db: f64) -> f64 {
    energy.sqrt() * db_to_linear(-snr_db)
}

/// Uniform prior mass function of length `order`
pub fn uniform_prior(order: usize) -> Vec<f64> {
    vec![1.0 / order as f64; order]
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_pam4_energy() {
        let pam = [-3.0, -1.0, 3.0, 1.0];
        let es = symbol_energy(&pam, &uniform_prior(4));
        assert!((es - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_energy_follows_prior() {
        let pam = [-3.0, -1.0, 3.0, 1.0];
        // All mass on the inner points
        let pk = [0.0, 0.5, 0.0, 0.5];
        assert!((symbol_energy(&pam, &pk) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_complex_energy() {
        let qpsk = [
            Complex64::new(1.0, 1.0),
            Complex64::new(1.0, -1.0),
            Complex64::new(-1.0, 1.0),
            Complex64::new(-1.0, -1.0),
        ];
        assert!((symbol_energy(&qpsk, &uniform_prior(4)) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sigma_from_snr() {
        // Es = 1 at 0 dB → σ = 1
        assert!((sigma_from_snr_db(1.0, 0.0) - 1.0).abs() < 1e-12);
        // 20 dB is a factor of 10 in amplitude
        assert!((sigma_from_snr_db(1.0, 20.0) - 0.1).abs() < 1e-12);
        // Es = 5 (4-PAM) at 0 dB
        assert!((sigma_from_snr_db(5.0, 0.0) - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_prior_sums_to_one() {
        let pk = uniform_prior(64);
        assert_eq!(pk.len(), 64);
        assert!((pk.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }
}
