//! Additive White Gaussian Noise generator
//!
//! Uses Box-Muller transform for Gaussian samples.

use num_complex::Complex64;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// AWGN generator with configurable standard deviation
///
/// Real samples have variance σ². Complex samples have total variance σ²,
/// split evenly between I and Q.
pub struct NoiseGenerator {
    /// Standard deviation (sqrt of noise power)
    std_dev: f64,

    /// Internal RNG
    rng: ChaCha8Rng,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl NoiseGenerator {
    /// Create a generator seeded directly
    pub fn new(std_dev: f64, seed: u64) -> Self {
        Self {
            std_dev,
            rng: ChaCha8Rng::seed_from_u64(seed),
            cached: None,
        }
    }

    /// Create a generator whose seed is drawn from another RNG
    pub fn from_rng(std_dev: f64, seed_rng: &mut ChaCha8Rng) -> Self {
        let seed: u64 = seed_rng.gen();
        Self::new(std_dev, seed)
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Next N(0, 1) sample
    fn standard_normal(&mut self) -> f64 {
        if let Some(cached) = self.cached.take() {
            return cached;
        }

        // Box-Muller transform generates two independent Gaussian samples
        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();

        // Avoid log(0)
        let u1 = u1.max(1e-300);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.cached = Some(r * theta.sin());
        r * theta.cos()
    }

    /// Next real noise sample, N(0, σ²)
    pub fn next_sample(&mut self) -> f64 {
        self.standard_normal() * self.std_dev
    }

    /// Next complex noise sample, CN(0, σ²)
    pub fn next_complex(&mut self) -> Complex64 {
        let k = self.std_dev * FRAC_1_SQRT_2;
        let re = self.standard_normal() * k;
        let im = self.standard_normal() * k;
        Complex64::new(re, im)
    }

    /// Add noise to a block of real samples in place
    pub fn corrupt(&mut self, samples: &mut [f64]) {
        for s in samples.iter_mut() {
            *s += self.next_sample();
        }
    }

    /// Add noise to a block of complex samples in place
    pub fn corrupt_complex(&mut self, samples: &mut [Complex64]) {
        for s in samples.iter_mut() {
            *s += self.next_complex();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_creation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let noise = NoiseGenerator::from_rng(0.1, &mut rng);
        assert!((noise.std_dev() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_noise_statistics() {
        let mut noise = NoiseGenerator::new(1.0, 42);

        let n = 10000;
        let samples: Vec<f64> = (0..n).map(|_| noise.next_sample()).collect();

        let mean: f64 = samples.iter().sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.1, "Mean {} should be close to 0", mean);

        let variance: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((variance - 1.0).abs() < 0.1, "Variance {} should be close to 1", variance);
    }

    #[test]
    fn test_noise_deterministic() {
        let mut noise1 = NoiseGenerator::new(0.5, 7);
        let mut noise2 = NoiseGenerator::new(0.5, 7);

        for _ in 0..100 {
            assert_eq!(noise1.next_sample(), noise2.next_sample());
        }
    }

    #[test]
    fn test_noise_std_dev_scaling() {
        for &sigma in &[0.1, 1.0, 3.0] {
            let mut noise = NoiseGenerator::new(sigma, 42);
            let n = 50000usize;
            let samples: Vec<f64> = (0..n).map(|_| noise.next_sample()).collect();

            let mean: f64 = samples.iter().sum::<f64>() / n as f64;
            let variance: f64 =
                samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

            let power = sigma * sigma;
            assert!(
                (variance - power).abs() / power < 0.1,
                "For σ={}, measured variance={}",
                sigma,
                variance
            );
        }
    }

    #[test]
    fn test_complex_noise_splits_power() {
        let mut noise = NoiseGenerator::new(2.0, 42);
        let n = 50000usize;
        let samples: Vec<Complex64> = (0..n).map(|_| noise.next_complex()).collect();

        let p_re: f64 = samples.iter().map(|s| s.re * s.re).sum::<f64>() / n as f64;
        let p_im: f64 = samples.iter().map(|s| s.im * s.im).sum::<f64>() / n as f64;

        // Total 4.0, 2.0 per dimension
        assert!((p_re - 2.0).abs() < 0.1, "I power {}", p_re);
        assert!((p_im - 2.0).abs() < 0.1, "Q power {}", p_im);
    }

    #[test]
    fn test_corrupt_in_place() {
        let mut clean = vec![1.0; 1000];
        let mut noise = NoiseGenerator::new(0.0, 1);
        noise.corrupt(&mut clean);
        assert!(clean.iter().all(|&s| s == 1.0));

        let mut noisy = vec![1.0; 1000];
        let mut noise = NoiseGenerator::new(0.5, 1);
        noise.corrupt(&mut noisy);
        assert!(noisy.iter().any(|&s| s != 1.0));
        assert!(noisy.iter().all(|s| s.is_finite()));
    }
}
