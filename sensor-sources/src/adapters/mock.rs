//! Module Mock
//!
//! Emulates the sensors of a real device. Readings default to the values the dashboard was
//! first demoed with.

mod fixed;
mod flaky;
mod gaussian;
mod noisy;

pub use fixed::FixedReader;
pub use flaky::FlakyReader;
pub use gaussian::GaussianNoise;
pub use noisy::{AddNoise, NoisyReader};

use common::types::{AccelerometerReading, GyroscopeReading, LocationReading, VibrationReading};

pub const DEFAULT_ACCELERATION: [f64; 3] = [1.2, 2.3, 3.4];
pub const DEFAULT_ROTATION: [f64; 3] = [0.1, 0.2, 0.3];
pub const DEFAULT_LATITUDE: f64 = 34.0522;
pub const DEFAULT_LONGITUDE: f64 = -118.2437;

pub fn default_accelerometer() -> AccelerometerReading {
    AccelerometerReading::new(DEFAULT_ACCELERATION)
}

pub fn default_gyroscope() -> GyroscopeReading {
    GyroscopeReading::new(DEFAULT_ROTATION)
}

pub fn default_vibration() -> VibrationReading {
    VibrationReading::new(false)
}

pub fn default_location() -> LocationReading {
    LocationReading::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
}
