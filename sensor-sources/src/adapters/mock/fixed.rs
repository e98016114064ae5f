use async_trait::async_trait;

use common::types::SensorKind;

use crate::errors::SensorError;
use crate::ports::SensorReader;

/// Reader that always returns the same reading.
#[derive(Clone, Debug)]
pub struct FixedReader<R> {
    kind: SensorKind,
    reading: R,
}

impl<R> FixedReader<R> {
    pub fn new(kind: SensorKind, reading: R) -> Self {
        Self { kind, reading }
    }
}

#[async_trait]
impl<R> SensorReader<R> for FixedReader<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> SensorKind {
        self.kind
    }

    async fn read(&self) -> Result<R, SensorError> {
        Ok(self.reading.clone())
    }
}
