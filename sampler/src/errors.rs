//! Module errors

use thiserror::Error;

use common::types::SensorKind;
use publisher::PublisherError;
use sensor_sources::SensorError;

/// One or more sensors failed during a tick. The tick is abandoned: no sample is derived
/// and nothing is appended to the history.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("Error refreshing sensor data: {}", describe(.failures))]
pub struct SensorReadFailure {
    timestamp: f64,
    failures: Vec<(SensorKind, SensorError)>,
}

impl SensorReadFailure {
    pub fn new(timestamp: f64, failures: Vec<(SensorKind, SensorError)>) -> Self {
        Self {
            timestamp,
            failures,
        }
    }

    /// Timestamp of the abandoned tick.
    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn get_failures(&self) -> &[(SensorKind, SensorError)] {
        &self.failures
    }

    /// Sensors that failed, in polling order.
    pub fn failed_sensors(&self) -> Vec<SensorKind> {
        self.failures.iter().map(|(kind, _)| *kind).collect()
    }
}

fn describe(failures: &[(SensorKind, SensorError)]) -> String {
    failures
        .iter()
        .map(|(kind, error)| format!("{} ({})", kind, error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Invalid or unreadable sampler configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("sampling period must be greater than zero")]
    InvalidPeriod,

    #[error("history window must hold at least one sample")]
    InvalidWindow,

    #[error("failure rate must be within [0, 1], got {0}")]
    InvalidFailureRate(f64),

    #[error("noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoiseStdev(f64),

    #[error("could not read configuration: {0}")]
    Read(#[from] std::io::Error),

    #[error("could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while building or querying the sampler service.
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not set up sensors: {0}")]
    Sensors(#[from] SensorError),

    #[error("listener registration failed: {0}")]
    Listener(#[from] PublisherError),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}
