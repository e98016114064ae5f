use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};

use common::types::{
    AccelerometerReading, GyroscopeReading, LocationReading, SensorKind, VibrationReading,
};

use super::gaussian::GaussianNoise;
use crate::errors::SensorError;
use crate::ports::SensorReader;

// Location noise is scaled down to keep positions within a few meters.
const DEGREES_PER_UNIT: f64 = 1e-5;
// Vibration is reported when the drawn noise exceeds this many standard deviations.
const VIBRATION_SIGMAS: f64 = 2.0;

/// Readings that can be perturbed with Gaussian noise.
pub trait AddNoise: Sized {
    fn add_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self;
}

impl AddNoise for AccelerometerReading {
    fn add_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self {
        AccelerometerReading::new(noise.add_noise_array(rng, self.inner().inner()))
    }
}

impl AddNoise for GyroscopeReading {
    fn add_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self {
        GyroscopeReading::new(noise.add_noise_array(rng, self.inner().inner()))
    }
}

impl AddNoise for LocationReading {
    fn add_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self {
        LocationReading::new(
            self.latitude + noise.draw_sample(rng) * DEGREES_PER_UNIT,
            self.longitude + noise.draw_sample(rng) * DEGREES_PER_UNIT,
        )
    }
}

impl AddNoise for VibrationReading {
    fn add_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self {
        let threshold = VIBRATION_SIGMAS * noise.std_dev();
        let spike = noise.draw_sample(rng).abs() > threshold && threshold > 0.0;
        VibrationReading::new(self.is_vibrating || spike)
    }
}

/// Reader returning a base reading perturbed with fresh Gaussian noise on every read.
#[derive(Clone, Debug)]
pub struct NoisyReader<R> {
    kind: SensorKind,
    base: R,
    noise: GaussianNoise,
}

impl<R> NoisyReader<R> {
    pub fn new(kind: SensorKind, base: R, noise: GaussianNoise) -> Self {
        Self { kind, base, noise }
    }
}

#[async_trait]
impl<R> SensorReader<R> for NoisyReader<R>
where
    R: AddNoise + Send + Sync + 'static,
{
    fn kind(&self) -> SensorKind {
        self.kind
    }

    async fn read(&self) -> Result<R, SensorError> {
        let mut rng = StdRng::from_entropy();
        Ok(self.base.add_noise(&self.noise, &mut rng))
    }
}
