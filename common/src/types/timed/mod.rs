pub mod derived_sample;
pub mod fused_sample;

pub use crate::types::timed::derived_sample::DerivedSample;
pub use crate::types::timed::fused_sample::FusedSample;
