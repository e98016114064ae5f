use async_trait::async_trait;

use common::types::SensorKind;

use crate::errors::SensorError;

/// Reader for the current value of one sensor.
#[async_trait]
pub trait SensorReader<R>: Send + Sync {
    /// Sensor this reader is bound to.
    fn kind(&self) -> SensorKind;

    /// Fetches the current reading.
    /// Returns a SensorError if the device can't be reached or the reading can't be decoded.
    async fn read(&self) -> Result<R, SensorError>;
}
