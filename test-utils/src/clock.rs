use std::sync::{Arc, Mutex};

use common::Clock;

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Arc<Mutex<f64>>);

impl ManualClock {
    pub fn new(now_secs: f64) -> Self {
        Self(Arc::new(Mutex::new(now_secs)))
    }

    pub fn set(&self, now_secs: f64) {
        *self.0.lock().unwrap() = now_secs;
    }

    pub fn advance(&self, secs: f64) {
        *self.0.lock().unwrap() += secs;
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        *self.0.lock().unwrap()
    }
}
