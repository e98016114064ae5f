//! # Crate sampler_rs
//!
//! ## sampler_rs
//!
//! The `sampler_rs` crate polls four sensors (accelerometer, gyroscope, vibration and
//! location) on a fixed cadence, fuses their readings into one timestamped sample, derives
//! the acceleration magnitude and its rate of change, and accumulates the samples in an
//! ordered history for charts, tables and CSV export.
//!
//! Features include:
//! - Serialized tick loop: one tick at start, then one every period (5 s by default) after the
//!   previous tick finished. Manual refresh ticks run through the same loop.
//! - Concurrent sensor reads sharing a single timestamp. A failing sensor abandons the tick
//!   without touching the history or the derivative baseline.
//! - Optional bounded history window.
//! - Registration of listeners notified of every new sample and every failed tick.
//!
//! ### Example
//!
//! ```no_run
//! use sampler_rs::{run_mock_service, SamplerConfig};
//! use common::types::SampleField;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = SamplerConfig::default().with_period_millis(1000);
//! let (handle, service) = run_mock_service(&config, true, Some(10_000)).unwrap();
//! handle.await.unwrap();
//!
//! for (timestamp, rate) in service.project(SampleField::AccelerationRateOfChange).await {
//!     println!("{:.1}s: {:.3}", timestamp, rate);
//! }
//! # }
//! ```

pub mod config;
pub mod derivative;
pub mod errors;
pub mod events;
pub mod export;
pub mod fusion;
pub mod history;
mod pipeline;
pub mod scheduler;
pub mod service;
mod shutdown;

pub use config::{MockConfig, SamplerConfig};
pub use errors::{ConfigError, SamplerError, SensorReadFailure};
pub use events::{EventKind, SamplerEvent};
pub use history::History;
pub use service::{
    run_mock_service, run_service, run_service_with_sensors, sensors_from_config, SamplerService,
};
