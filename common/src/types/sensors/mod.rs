pub mod sensor_kind;

pub use crate::types::sensors::sensor_kind::SensorKind;
