use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::errors::SensorError;

/// Functionality to add some Gaussian noise.
#[derive(Clone, Debug)]
pub struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev.
    /// Returns a Device error if stdev is negative or not finite.
    pub fn new(mean: f64, stdev: f64) -> Result<Self, SensorError> {
        // Normal::new accepts a negative stdev and mirrors the distribution
        if !stdev.is_finite() || stdev < 0.0 {
            return Err(SensorError::Device(format!(
                "invalid noise standard deviation: {}",
                stdev
            )));
        }
        Normal::new(mean, stdev)
            .map(|normal| Self { normal })
            .map_err(|e| SensorError::Device(format!("invalid noise distribution: {}", e)))
    }

    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }

    /// Sample from distribution
    pub fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    /// Adds noise to sample
    pub fn add_noise(&self, rng: &mut StdRng, data: f64) -> f64 {
        data + self.draw_sample(rng)
    }

    /// Adds noise to every coordinate
    pub fn add_noise_array(&self, rng: &mut StdRng, data: [f64; 3]) -> [f64; 3] {
        data.map(|d| self.add_noise(rng, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_gaussian_new() {
        let noise = GaussianNoise::new(0.0, 1.0).unwrap();
        assert_eq!(noise.normal.mean(), 0.0);
        assert_eq!(noise.std_dev(), 1.0);
    }

    #[test]
    fn test_gaussian_rejects_invalid_stdev() {
        for stdev in [-1.0, -f64::MIN_POSITIVE, f64::NAN, f64::INFINITY] {
            let result = GaussianNoise::new(0.0, stdev);
            assert!(
                matches!(result, Err(SensorError::Device(_))),
                "stdev {} accepted",
                stdev
            );
        }
    }

    #[test]
    fn test_zero_stdev_adds_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let noise = GaussianNoise::new(0.0, 0.0).unwrap();
        assert_eq!(noise.add_noise(&mut rng, 5.0), 5.0);
        assert_eq!(
            noise.add_noise_array(&mut rng, [1.0, 2.0, 3.0]),
            [1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_add_noise_stays_close() {
        let stdev = 0.01;
        let mut rng = StdRng::seed_from_u64(42);
        let noise = GaussianNoise::new(0.0, stdev).unwrap();
        for _ in 0..100 {
            let result = noise.add_noise(&mut rng, 5.0);
            assert!((result - 5.0).abs() < 10.0 * stdev);
        }
    }
}
