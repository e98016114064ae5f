use std::collections::VecDeque;
use std::num::NonZeroUsize;

use common::types::{DerivedSample, SampleField};

/// Ordered store of derived samples, oldest first.
///
/// Unbounded by default. With a window of `n` samples, pushing the `n+1`-th sample evicts
/// the oldest one.
#[derive(Clone, Debug, Default)]
pub struct History {
    samples: VecDeque<DerivedSample>,
    window: Option<NonZeroUsize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `window` samples.
    pub fn with_window(window: NonZeroUsize) -> Self {
        Self {
            samples: VecDeque::with_capacity(window.get()),
            window: Some(window),
        }
    }

    pub fn window(&self) -> Option<NonZeroUsize> {
        self.window
    }

    /// Appends `sample` at the newest end. Returns the evicted sample, if any.
    pub fn append(&mut self, sample: DerivedSample) -> Option<DerivedSample> {
        let evicted = match self.window {
            Some(window) if self.samples.len() >= window.get() => self.samples.pop_front(),
            _ => None,
        };
        self.samples.push_back(sample);
        evicted
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<&DerivedSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivedSample> + '_ {
        self.samples.iter()
    }

    /// Copy of the stored samples, oldest first.
    pub fn samples(&self) -> Vec<DerivedSample> {
        self.samples.iter().cloned().collect()
    }

    /// `(timestamp, value)` pairs for `field`, oldest first. Used to chart a single attribute.
    pub fn project(&self, field: SampleField) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .map(|sample| (sample.get_timestamp(), field.value_of(sample)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::{
        AccelerometerReading, FusedSample, GyroscopeReading, LocationReading, VibrationReading,
    };

    fn sample(timestamp: f64, latitude: f64) -> DerivedSample {
        let fused = FusedSample::new(
            timestamp,
            AccelerometerReading::new([1.0, 0.0, 0.0]),
            GyroscopeReading::new([0.0, 0.0, 0.0]),
            VibrationReading::new(timestamp > 1.0),
            LocationReading::new(latitude, 0.0),
        );
        DerivedSample::new(fused, 1.0, 0.0)
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
        assert!(history.project(SampleField::Latitude).is_empty());
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut history = History::new();
        for (idx, latitude) in [10.0, 20.0, 30.0].into_iter().enumerate() {
            assert!(history.append(sample(idx as f64, latitude)).is_none());
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().get_latitude(), 30.0);
        let timestamps: Vec<f64> = history.iter().map(|s| s.get_timestamp()).collect();
        assert_eq!(timestamps, vec![0.0, 1.0, 2.0]);
        assert_eq!(history.samples()[0].get_latitude(), 10.0);
    }

    #[test]
    fn test_project() {
        let mut history = History::new();
        history.append(sample(0.0, 10.0));
        history.append(sample(5.0, 20.0));

        assert_eq!(
            history.project(SampleField::Latitude),
            vec![(0.0, 10.0), (5.0, 20.0)]
        );
        assert_eq!(
            history.project(SampleField::Vibrating),
            vec![(0.0, 0.0), (5.0, 1.0)]
        );
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut history = History::with_window(NonZeroUsize::new(2).unwrap());
        history.append(sample(0.0, 10.0));
        history.append(sample(1.0, 20.0));
        let evicted = history.append(sample(2.0, 30.0));

        assert_eq!(evicted.unwrap().get_latitude(), 10.0);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.project(SampleField::Latitude),
            vec![(1.0, 20.0), (2.0, 30.0)]
        );
    }
}
