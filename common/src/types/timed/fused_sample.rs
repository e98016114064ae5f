use serde::Serialize;

use crate::types::readings::{
    AccelerometerReading, GyroscopeReading, LocationReading, VibrationReading,
};
use crate::types::untimed::XYZ;

/// One timestamped record combining the readings of all four sensors taken in the same tick.
///
/// All readings share the timestamp taken when the tick began.
///
/// # Examples
///
/// ```
/// use common::types::readings::{AccelerometerReading, GyroscopeReading, LocationReading, VibrationReading};
/// use common::types::timed::FusedSample;
///
/// let sample = FusedSample::new(
///     5.0,
///     AccelerometerReading::new([1.2, 2.3, 3.4]),
///     GyroscopeReading::new([0.1, 0.2, 0.3]),
///     VibrationReading::new(false),
///     LocationReading::new(34.0522, -118.2437),
/// );
///
/// assert_eq!(sample.get_timestamp(), 5.0);
/// assert_eq!(sample.get_latitude(), 34.0522);
/// assert!(!sample.is_vibrating());
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct FusedSample {
    timestamp: f64,
    accelerometer: XYZ,
    gyroscope: XYZ,
    vibrating: bool,
    latitude: f64,
    longitude: f64,
}

impl FusedSample {
    pub fn new(
        timestamp: f64,
        accelerometer: AccelerometerReading,
        gyroscope: GyroscopeReading,
        vibration: VibrationReading,
        location: LocationReading,
    ) -> Self {
        Self {
            timestamp,
            accelerometer: accelerometer.inner(),
            gyroscope: gyroscope.inner(),
            vibrating: vibration.is_vibrating,
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }

    /// Timestamp in seconds on the sampler clock.
    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn get_accelerometer(&self) -> XYZ {
        self.accelerometer
    }

    pub fn get_gyroscope(&self) -> XYZ {
        self.gyroscope
    }

    pub fn is_vibrating(&self) -> bool {
        self.vibrating
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }
}
