use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use common::types::SensorKind;
use sensor_sources::{SensorError, SensorReader};

/// Sensor returning queued results in order.
///
/// Once the queue is empty it keeps returning the fallback reading, or a device error if
/// there is none. With a gate, every read waits for one permit before answering.
#[derive(Clone)]
pub struct ScriptedReader<R> {
    kind: SensorKind,
    script: Arc<Mutex<VecDeque<Result<R, SensorError>>>>,
    fallback: Option<R>,
    gate: Option<Arc<Semaphore>>,
    reads: Arc<AtomicUsize>,
}

impl<R: Clone> ScriptedReader<R> {
    pub fn new(kind: SensorKind) -> Self {
        Self {
            kind,
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: None,
            gate: None,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_fallback(mut self, reading: R) -> Self {
        self.fallback = Some(reading);
        self
    }

    pub fn with_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn push_ok(&self, reading: R) {
        self.script.lock().unwrap().push_back(Ok(reading));
    }

    pub fn push_err(&self, error: SensorError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Number of reads started so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn next_result(&self) -> Result<R, SensorError> {
        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => self
                .fallback
                .clone()
                .ok_or_else(|| SensorError::Device(format!("{} script exhausted", self.kind))),
        }
    }
}

#[async_trait]
impl<R> SensorReader<R> for ScriptedReader<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn kind(&self) -> SensorKind {
        self.kind
    }

    async fn read(&self) -> Result<R, SensorError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            match gate.acquire().await {
                Ok(permit) => permit.forget(),
                Err(_) => return Err(SensorError::Device("gate closed".to_string())),
            }
        }
        self.next_result()
    }
}
