//! # Crate sensor_sources
//!
//! ## sensor_sources
//!
//! The `sensor_sources` crate provides the readers the sampler polls on every tick. Each reader
//! exposes one asynchronous "fetch current reading" operation for one sensor and may fail.
//!
//! Features include:
//! - Accelerometer [m/s^2] and Gyroscope [rad/s] 3-axis readings, vibration flag and GPS location.
//! - A production adapter that reads every sensor from a device exposing a small JSON REST API
//!   (`GET {base_url}/accelerometer`, `/gyroscope`, `/vibration`, `/location`).
//! - Mock adapters returning fixed readings, optionally with Gaussian noise and injected
//!   failures, for demos and tests.

pub mod adapters;
pub mod errors;
mod http_client;
pub mod ports;
pub mod sensor_set;

pub use errors::SensorError;
pub use ports::SensorReader;
pub use sensor_set::SensorSet;
