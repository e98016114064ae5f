//! Rate of change of the acceleration magnitude between consecutive successful samples.

use common::types::{DerivedSample, FusedSample};

/// Magnitude and timestamp of the last successful sample. Empty before the first one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivativeState {
    previous: Option<(f64, f64)>,
}

impl DerivativeState {
    pub fn new(previous_magnitude: f64, previous_timestamp: f64) -> Self {
        Self {
            previous: Some((previous_magnitude, previous_timestamp)),
        }
    }

    pub fn previous_magnitude(&self) -> Option<f64> {
        self.previous.map(|(magnitude, _)| magnitude)
    }

    pub fn previous_timestamp(&self) -> Option<f64> {
        self.previous.map(|(_, timestamp)| timestamp)
    }
}

/// `|magnitude - previous| / elapsed` in units per second.
///
/// Returns 0 when there is no previous sample, when no time elapsed (or the clock went
/// backwards), and when the division overflows. The result is always finite and `>= 0`.
///
/// ```
/// use sampler_rs::derivative::{acceleration_rate_of_change, DerivativeState};
///
/// let state = DerivativeState::new(5.0, 0.0);
/// assert_eq!(acceleration_rate_of_change(&state, 10.0, 5.0), 1.0);
/// assert_eq!(acceleration_rate_of_change(&DerivativeState::default(), 10.0, 5.0), 0.0);
/// ```
pub fn acceleration_rate_of_change(state: &DerivativeState, magnitude: f64, timestamp: f64) -> f64 {
    let Some((previous_magnitude, previous_timestamp)) = state.previous else {
        return 0.0;
    };
    let elapsed_secs = timestamp - previous_timestamp;
    if elapsed_secs.is_nan() || elapsed_secs <= 0.0 {
        return 0.0;
    }
    let rate = (magnitude - previous_magnitude).abs() / elapsed_secs;
    if rate.is_finite() {
        rate
    } else {
        0.0
    }
}

/// Holds the [`DerivativeState`] across ticks. Only the sampling loop drives it.
#[derive(Debug, Default)]
pub struct DerivativeTracker {
    state: DerivativeState,
}

impl DerivativeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DerivativeState {
        self.state
    }

    /// Computes the magnitude and rate for `sample`, then records it as the previous sample.
    pub fn derive(&mut self, sample: FusedSample) -> DerivedSample {
        let magnitude = sample.get_accelerometer().magnitude();
        let timestamp = sample.get_timestamp();
        let rate = acceleration_rate_of_change(&self.state, magnitude, timestamp);
        self.state = DerivativeState::new(magnitude, timestamp);
        DerivedSample::new(sample, magnitude, rate)
    }
}
