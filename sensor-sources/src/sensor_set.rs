use std::sync::Arc;

use common::types::{
    AccelerometerReading, GyroscopeReading, LocationReading, SensorKind, VibrationReading,
};

use crate::adapters::mock::{self, FixedReader, FlakyReader, GaussianNoise, NoisyReader};
use crate::adapters::production::HttpSensorReader;
use crate::errors::SensorError;
use crate::http_client::HttpClient;
use crate::ports::SensorReader;

const GAUSSIAN_SENSOR_MEAN: f64 = 0f64;
pub const GAUSSIAN_SENSOR_STDEV: f64 = 0.5;

/// The four readers polled together on every tick.
#[derive(Clone)]
pub struct SensorSet {
    pub accelerometer: Arc<dyn SensorReader<AccelerometerReading>>,
    pub gyroscope: Arc<dyn SensorReader<GyroscopeReading>>,
    pub vibration: Arc<dyn SensorReader<VibrationReading>>,
    pub location: Arc<dyn SensorReader<LocationReading>>,
}

impl SensorSet {
    pub fn new(
        accelerometer: Arc<dyn SensorReader<AccelerometerReading>>,
        gyroscope: Arc<dyn SensorReader<GyroscopeReading>>,
        vibration: Arc<dyn SensorReader<VibrationReading>>,
        location: Arc<dyn SensorReader<LocationReading>>,
    ) -> Self {
        Self {
            accelerometer,
            gyroscope,
            vibration,
            location,
        }
    }

    /// Readers for a device serving `GET {base_url}/{sensor}`. All readers share one client.
    /// Returns a ClientBuild error if the Http client cannot be created
    pub fn http(base_url: &str) -> Result<Self, SensorError> {
        let client = Arc::new(HttpClient::new(base_url)?);
        Ok(Self {
            accelerometer: Arc::new(HttpSensorReader::with_client(
                client.clone(),
                SensorKind::Accelerometer,
            )),
            gyroscope: Arc::new(HttpSensorReader::with_client(
                client.clone(),
                SensorKind::Gyroscope,
            )),
            vibration: Arc::new(HttpSensorReader::with_client(
                client.clone(),
                SensorKind::Vibration,
            )),
            location: Arc::new(HttpSensorReader::with_client(client, SensorKind::Location)),
        })
    }

    /// Readers returning the default mock readings.
    pub fn mock() -> Self {
        Self {
            accelerometer: Arc::new(FixedReader::new(
                SensorKind::Accelerometer,
                mock::default_accelerometer(),
            )),
            gyroscope: Arc::new(FixedReader::new(
                SensorKind::Gyroscope,
                mock::default_gyroscope(),
            )),
            vibration: Arc::new(FixedReader::new(
                SensorKind::Vibration,
                mock::default_vibration(),
            )),
            location: Arc::new(FixedReader::new(
                SensorKind::Location,
                mock::default_location(),
            )),
        }
    }

    /// Mock readers adding zero-mean Gaussian noise with `stdev` to every reading.
    pub fn noisy_mock(stdev: f64) -> Result<Self, SensorError> {
        let noise = GaussianNoise::new(GAUSSIAN_SENSOR_MEAN, stdev)?;
        Ok(Self {
            accelerometer: Arc::new(NoisyReader::new(
                SensorKind::Accelerometer,
                mock::default_accelerometer(),
                noise.clone(),
            )),
            gyroscope: Arc::new(NoisyReader::new(
                SensorKind::Gyroscope,
                mock::default_gyroscope(),
                noise.clone(),
            )),
            vibration: Arc::new(NoisyReader::new(
                SensorKind::Vibration,
                mock::default_vibration(),
                noise.clone(),
            )),
            location: Arc::new(NoisyReader::new(
                SensorKind::Location,
                mock::default_location(),
                noise,
            )),
        })
    }

    /// Wraps every reader so that a fraction `failure_rate` of its reads fail.
    pub fn with_failure_rate(self, failure_rate: f64) -> Self {
        Self {
            accelerometer: Arc::new(FlakyReader::new(self.accelerometer, failure_rate)),
            gyroscope: Arc::new(FlakyReader::new(self.gyroscope, failure_rate)),
            vibration: Arc::new(FlakyReader::new(self.vibration, failure_rate)),
            location: Arc::new(FlakyReader::new(self.location, failure_rate)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_set_reads_defaults() {
        let sensors = SensorSet::mock();
        assert_eq!(
            sensors.accelerometer.read().await.unwrap(),
            AccelerometerReading::new([1.2, 2.3, 3.4])
        );
        assert_eq!(
            sensors.gyroscope.read().await.unwrap(),
            GyroscopeReading::new([0.1, 0.2, 0.3])
        );
        assert!(!sensors.vibration.read().await.unwrap().is_vibrating);
        assert_eq!(
            sensors.location.read().await.unwrap(),
            LocationReading::new(34.0522, -118.2437)
        );
    }

    #[tokio::test]
    async fn test_readers_report_their_kind() {
        for sensors in [
            SensorSet::mock(),
            SensorSet::noisy_mock(GAUSSIAN_SENSOR_STDEV).unwrap(),
        ] {
            assert_eq!(sensors.accelerometer.kind(), SensorKind::Accelerometer);
            assert_eq!(sensors.gyroscope.kind(), SensorKind::Gyroscope);
            assert_eq!(sensors.vibration.kind(), SensorKind::Vibration);
            assert_eq!(sensors.location.kind(), SensorKind::Location);
        }
    }

    #[test]
    fn test_noisy_mock_rejects_negative_stdev() {
        assert!(SensorSet::noisy_mock(-1.0).is_err());
    }

    #[tokio::test]
    async fn test_failing_set() {
        let sensors = SensorSet::mock().with_failure_rate(1.0);
        assert!(sensors.accelerometer.read().await.is_err());
        assert!(sensors.location.read().await.is_err());
    }

    #[test]
    fn test_http_set_new() {
        let sensors = SensorSet::http("http://localhost:8080/").expect("Error creating sensors");
        assert_eq!(sensors.vibration.kind(), SensorKind::Vibration);
    }
}
