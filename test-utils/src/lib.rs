//! Test and demo helpers: scripted sensors, a manually driven clock, and listener sinks.

pub mod clock;
pub mod sensors;
pub mod sinks;
