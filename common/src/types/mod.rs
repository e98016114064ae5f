pub mod callback;
pub mod clock;
pub mod readings;
pub mod sample_field;
pub mod sensors;
pub mod timed;
pub mod untimed;

pub use callback::Callback;
pub use clock::{MonotonicClock, SystemClock};
pub use readings::{AccelerometerReading, GyroscopeReading, LocationReading, VibrationReading};
pub use sample_field::SampleField;
pub use sensors::SensorKind;
pub use timed::{DerivedSample, FusedSample};
pub use untimed::XYZ;
