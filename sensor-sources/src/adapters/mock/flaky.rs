use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;

use common::types::SensorKind;

use crate::errors::SensorError;
use crate::ports::SensorReader;

/// Wraps a reader and makes a fraction of its reads fail with a device error.
pub struct FlakyReader<R> {
    inner: Arc<dyn SensorReader<R>>,
    failure_rate: f64,
}

impl<R> FlakyReader<R>
where
    R: Send + 'static,
{
    /// `failure_rate` is clamped to `[0, 1]`.
    pub fn new(inner: Arc<dyn SensorReader<R>>, failure_rate: f64) -> Self {
        Self {
            inner,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl<R> SensorReader<R> for FlakyReader<R>
where
    R: Send + 'static,
{
    fn kind(&self) -> SensorKind {
        self.inner.kind()
    }

    async fn read(&self) -> Result<R, SensorError> {
        let fail = {
            let mut rng = StdRng::from_entropy();
            rng.gen_bool(self.failure_rate)
        };
        if fail {
            return Err(SensorError::Device(format!(
                "{} did not answer",
                self.inner.kind()
            )));
        }
        self.inner.read().await
    }
}
