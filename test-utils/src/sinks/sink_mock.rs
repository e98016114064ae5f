use std::sync::{Arc, Mutex};
use uuid::Uuid;

use publisher::{listener, Listener};

/// Listener sink that records every notification it receives.
pub struct SinkMock<T> {
    received: Arc<Mutex<Vec<(Uuid, Arc<T>)>>>,
}

impl<T> Clone for SinkMock<T> {
    fn clone(&self) -> Self {
        Self {
            received: self.received.clone(),
        }
    }
}

impl<T> Default for SinkMock<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinkMock<T>
where
    T: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Listener forwarding notifications to this sink.
    pub fn listener(&self) -> Listener<T> {
        let sink = self.clone();
        listener!(sink.process_samples)
    }

    pub async fn process_samples(&self, id: Uuid, samples: Arc<T>) {
        self.received.lock().unwrap().push((id, samples));
    }

    pub fn received(&self) -> Vec<Arc<T>> {
        self.received
            .lock()
            .unwrap()
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn received_by(&self, id: Uuid) -> usize {
        self.received
            .lock()
            .unwrap()
            .iter()
            .filter(|(listener_id, _)| *listener_id == id)
            .count()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}
