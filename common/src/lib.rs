//! General functionality for the `sensorstream` workspace
//!
//! Shared sample types produced by the sampler and consumed by the presentation layer,
//! sensor readings returned by the sensor adapters, clocks, and the listener traits used
//! by the `publisher` crate.

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::{Clock, Notifiable};

// Re-export types
#[doc(inline)]
pub use types::{
    AccelerometerReading, Callback, DerivedSample, FusedSample, GyroscopeReading,
    LocationReading, MonotonicClock, SampleField, SensorKind, SystemClock, VibrationReading, XYZ,
};
