use serde::Serialize;
use std::ops::Deref;

use crate::types::timed::FusedSample;

/// A [`FusedSample`] augmented with the acceleration magnitude and its rate of change
/// with respect to the previous successful sample.
///
/// Derefs to the inner [`FusedSample`], so sensor fields are read directly from it.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct DerivedSample {
    #[serde(flatten)]
    sample: FusedSample,
    acceleration_magnitude: f64,
    acceleration_rate_of_change: f64,
}

impl DerivedSample {
    pub fn new(
        sample: FusedSample,
        acceleration_magnitude: f64,
        acceleration_rate_of_change: f64,
    ) -> Self {
        Self {
            sample,
            acceleration_magnitude,
            acceleration_rate_of_change,
        }
    }

    pub fn get_fused(&self) -> &FusedSample {
        &self.sample
    }

    /// Euclidean norm of the accelerometer vector.
    pub fn get_acceleration_magnitude(&self) -> f64 {
        self.acceleration_magnitude
    }

    /// Absolute change of the acceleration magnitude per second. Always finite and `>= 0`.
    pub fn get_acceleration_rate_of_change(&self) -> f64 {
        self.acceleration_rate_of_change
    }
}

impl Deref for DerivedSample {
    type Target = FusedSample;

    fn deref(&self) -> &Self::Target {
        &self.sample
    }
}
