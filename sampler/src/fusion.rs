//! Polls the four sensors and combines their readings into one [`FusedSample`].

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use common::types::{
    AccelerometerReading, FusedSample, GyroscopeReading, LocationReading, SensorKind,
    VibrationReading,
};
use sensor_sources::{SensorError, SensorReader, SensorSet};

use crate::errors::SensorReadFailure;

enum Reading {
    Accelerometer(AccelerometerReading),
    Gyroscope(GyroscopeReading),
    Vibration(VibrationReading),
    Location(LocationReading),
}

type PendingRead<'a> = BoxFuture<'a, (SensorKind, Result<Reading, SensorError>)>;

pub struct SampleFusion {
    sensors: SensorSet,
}

impl SampleFusion {
    pub fn new(sensors: SensorSet) -> Self {
        Self { sensors }
    }

    /// Reads all four sensors concurrently and stamps the result with `timestamp`.
    ///
    /// Returns as soon as one read fails. The failure lists that sensor plus any other
    /// read that had already failed by then; reads still in flight are dropped.
    /// Readings carrying non-finite values are rejected as
    /// [`SensorError::IncorrectDataFormat`].
    pub async fn fuse(&self, timestamp: f64) -> Result<FusedSample, SensorReadFailure> {
        let mut reads: FuturesUnordered<PendingRead<'_>> = [
            tagged(self.sensors.accelerometer.as_ref(), Reading::Accelerometer),
            tagged(self.sensors.gyroscope.as_ref(), Reading::Gyroscope),
            tagged(self.sensors.vibration.as_ref(), Reading::Vibration),
            tagged(self.sensors.location.as_ref(), Reading::Location),
        ]
        .into_iter()
        .collect();

        let mut accelerometer = None;
        let mut gyroscope = None;
        let mut vibration = None;
        let mut location = None;

        while let Some((kind, result)) = reads.next().await {
            match result {
                Ok(Reading::Accelerometer(reading)) => accelerometer = Some(reading),
                Ok(Reading::Gyroscope(reading)) => gyroscope = Some(reading),
                Ok(Reading::Vibration(reading)) => vibration = Some(reading),
                Ok(Reading::Location(reading)) => location = Some(reading),
                Err(error) => {
                    let mut failures = vec![(kind, error)];
                    while let Some(Some((kind, result))) = reads.next().now_or_never() {
                        if let Err(error) = result {
                            failures.push((kind, error));
                        }
                    }
                    failures.sort_by_key(|(kind, _)| *kind);
                    return Err(SensorReadFailure::new(timestamp, failures));
                }
            }
        }

        match (accelerometer, gyroscope, vibration, location) {
            (Some(accelerometer), Some(gyroscope), Some(vibration), Some(location)) => {
                debug!("Fused sensor readings at t={:.3}s", timestamp);
                Ok(FusedSample::new(
                    timestamp,
                    accelerometer,
                    gyroscope,
                    vibration,
                    location,
                ))
            }
            // each read fills its own slot, so this only reports readers that never resolved
            (accelerometer, gyroscope, vibration, location) => {
                let missing = [
                    (SensorKind::Accelerometer, accelerometer.is_none()),
                    (SensorKind::Gyroscope, gyroscope.is_none()),
                    (SensorKind::Vibration, vibration.is_none()),
                    (SensorKind::Location, location.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(kind, _)| (kind, SensorError::Device("no reading".to_string())))
                .collect();
                Err(SensorReadFailure::new(timestamp, missing))
            }
        }
    }
}

fn tagged<'a, R>(reader: &'a dyn SensorReader<R>, wrap: fn(R) -> Reading) -> PendingRead<'a>
where
    R: FiniteReading + Send + 'a,
{
    async move { (reader.kind(), read_checked(reader).await.map(wrap)) }.boxed()
}

/// Readings whose numeric fields must all be finite.
trait FiniteReading {
    fn is_finite(&self) -> bool;
}

impl FiniteReading for AccelerometerReading {
    fn is_finite(&self) -> bool {
        self.inner().inner().iter().all(|v| v.is_finite())
    }
}

impl FiniteReading for GyroscopeReading {
    fn is_finite(&self) -> bool {
        self.inner().inner().iter().all(|v| v.is_finite())
    }
}

impl FiniteReading for VibrationReading {
    fn is_finite(&self) -> bool {
        true
    }
}

impl FiniteReading for LocationReading {
    fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

async fn read_checked<R: FiniteReading>(reader: &dyn SensorReader<R>) -> Result<R, SensorError> {
    let reading = reader.read().await?;
    if reading.is_finite() {
        Ok(reading)
    } else {
        Err(SensorError::IncorrectDataFormat(format!(
            "{} reported a non-finite value",
            reader.kind()
        )))
    }
}
