//! Module errors

use thiserror::Error;

/// Represents the different ways a single sensor read can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The sensor or device reported a failure.
    #[error("device error: {0}")]
    Device(String),

    /// The device could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The received data format is incorrect.
    #[error("incorrect data format: {0}")]
    IncorrectDataFormat(String),

    /// The HTTP client used to reach the device could not be built.
    #[error("client build error: {0}")]
    ClientBuild(String),
}
