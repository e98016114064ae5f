use async_trait::async_trait;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use common::traits::Clock;
use common::types::DerivedSample;
use publisher::PublisherManager;

use crate::derivative::DerivativeTracker;
use crate::errors::SensorReadFailure;
use crate::events::{EventKind, SamplerEvent};
use crate::fusion::SampleFusion;
use crate::history::History;
use crate::scheduler::{TickHandler, TickTrigger};

/// State shared between the tick loop (sole writer) and the service queries.
pub(crate) struct SampleStore {
    pub(crate) history: RwLock<History>,
    pub(crate) failed_ticks: AtomicU64,
    pub(crate) publishers: PublisherManager<SamplerEvent, EventKind>,
}

impl SampleStore {
    pub(crate) fn new(history: History) -> Self {
        Self {
            history: RwLock::new(history),
            failed_ticks: AtomicU64::new(0),
            publishers: PublisherManager::new(&EventKind::ALL),
        }
    }
}

/// One tick: clock reading, fusion, derivation, append, notification.
pub(crate) struct SamplingPipeline {
    fusion: SampleFusion,
    tracker: DerivativeTracker,
    clock: Arc<dyn Clock>,
    store: Arc<SampleStore>,
}

impl SamplingPipeline {
    pub(crate) fn new(fusion: SampleFusion, clock: Arc<dyn Clock>, store: Arc<SampleStore>) -> Self {
        Self {
            fusion,
            tracker: DerivativeTracker::new(),
            clock,
            store,
        }
    }

    /// On failure the tracker and the history are left untouched.
    pub(crate) async fn tick(&mut self) -> Result<DerivedSample, SensorReadFailure> {
        let timestamp = self.clock.now_secs();
        let fused = self.fusion.fuse(timestamp).await?;
        let derived = self.tracker.derive(fused);
        self.store.history.write().await.append(derived.clone());
        Ok(derived)
    }
}

#[async_trait]
impl TickHandler for SamplingPipeline {
    async fn on_tick(&mut self, trigger: TickTrigger) {
        let event = match self.tick().await {
            Ok(sample) => {
                debug!(
                    "{:?} tick at t={:.3}s: |a|={:.3}, d|a|/dt={:.3}",
                    trigger,
                    sample.get_timestamp(),
                    sample.get_acceleration_magnitude(),
                    sample.get_acceleration_rate_of_change()
                );
                SamplerEvent::NewSample(sample)
            }
            Err(failure) => {
                warn!("{}", failure);
                self.store.failed_ticks.fetch_add(1, Ordering::Relaxed);
                SamplerEvent::ReadFailure(failure)
            }
        };
        self.store
            .publishers
            .notify_listeners(event.kind(), Arc::new(event))
            .await;
    }
}
