//! Periodic, serialized tick loop.
//!
//! The loop fires one tick immediately after [`SamplingScheduler::start`], then waits `period`
//! after each periodic tick has finished before firing the next one. Ticks never overlap: the
//! handler is driven from a single task and the next tick is only scheduled once the current
//! one has returned.

use async_trait::async_trait;
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{watch, Mutex as AsyncMutex, Notify};
use tokio::time::{sleep_until, Instant};

/// What caused a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickTrigger {
    Periodic,
    /// Out-of-band tick requested with [`SamplingScheduler::refresh`].
    Refresh,
}

/// Work executed on every tick.
#[async_trait]
pub trait TickHandler: Send + 'static {
    async fn on_tick(&mut self, trigger: TickTrigger);
}

#[derive(Default)]
struct RunSignals {
    stop: Arc<Notify>,
    refresh: Arc<Notify>,
}

#[derive(Default)]
struct LoopState {
    running: bool,
    generation: u64,
    in_flight: usize,
    signals: Option<RunSignals>,
}

struct Lifecycle {
    state: Mutex<LoopState>,
    finished: watch::Sender<u64>,
}

impl Lifecycle {
    fn new() -> Self {
        let (finished, _) = watch::channel(0);
        Self {
            state: Mutex::new(LoopState::default()),
            finished,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoopState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks a tick as started unless the loop `generation` has been stopped.
    fn begin_tick(&self, generation: u64) -> bool {
        let mut state = self.lock();
        if state.running && state.generation == generation {
            state.in_flight += 1;
            true
        } else {
            false
        }
    }

    fn end_tick(&self) {
        let mut state = self.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
    }

    fn finish(&self, generation: u64) {
        self.finished.send_modify(|finished| {
            *finished = (*finished).max(generation);
        });
    }
}

/// Owns the sampling lifecycle: start, stop, manual refresh.
pub struct SamplingScheduler<H: TickHandler> {
    handler: Arc<AsyncMutex<H>>,
    period: Duration,
    lifecycle: Arc<Lifecycle>,
}

impl<H: TickHandler> SamplingScheduler<H> {
    pub fn new(handler: H, period: Duration) -> Self {
        Self {
            handler: Arc::new(AsyncMutex::new(handler)),
            period,
            lifecycle: Arc::new(Lifecycle::new()),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Spawns the tick loop on the current tokio runtime. The first tick fires immediately.
    ///
    /// Returns `false` if the loop is already running.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn start(&self) -> bool {
        let mut state = self.lifecycle.lock();
        if state.running {
            return false;
        }
        state.running = true;
        state.generation += 1;
        let generation = state.generation;
        let signals = RunSignals::default();
        let stop = signals.stop.clone();
        let refresh = signals.refresh.clone();
        state.signals = Some(signals);
        drop(state);

        info!(
            "Starting sampling loop with a period of {} ms",
            self.period.as_millis()
        );
        tokio::spawn(run_loop(
            self.handler.clone(),
            self.lifecycle.clone(),
            generation,
            self.period,
            stop,
            refresh,
        ));
        true
    }

    /// Stops the loop. No tick starts after this returns; a tick already in flight is left
    /// to complete.
    ///
    /// Returns `false` if the loop was not running.
    pub fn stop(&self) -> bool {
        let mut state = self.lifecycle.lock();
        if !state.running {
            return false;
        }
        state.running = false;
        if let Some(signals) = state.signals.take() {
            signals.stop.notify_one();
        }
        info!("Sampling loop stopped");
        true
    }

    /// Requests an immediate tick. It runs after the tick in flight, if any, and does not
    /// shift the periodic cadence.
    ///
    /// Returns `false` if the loop is not running.
    pub fn refresh(&self) -> bool {
        let state = self.lifecycle.lock();
        match (state.running, &state.signals) {
            (true, Some(signals)) => {
                signals.refresh.notify_one();
                true
            }
            _ => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.lock().running
    }

    pub fn is_tick_in_flight(&self) -> bool {
        self.lifecycle.lock().in_flight > 0
    }

    /// Waits until the most recently started loop has exited, including its last tick.
    /// Returns immediately if the loop was never started.
    pub async fn join(&self) {
        let generation = self.lifecycle.lock().generation;
        let mut finished = self.lifecycle.finished.subscribe();
        let _ = finished.wait_for(|done| *done >= generation).await;
    }
}

impl<H: TickHandler> Drop for SamplingScheduler<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_loop<H: TickHandler>(
    handler: Arc<AsyncMutex<H>>,
    lifecycle: Arc<Lifecycle>,
    generation: u64,
    period: Duration,
    stop: Arc<Notify>,
    refresh: Arc<Notify>,
) {
    let mut next_tick = Instant::now();
    loop {
        let trigger = tokio::select! {
            biased;
            _ = stop.notified() => break,
            _ = refresh.notified() => TickTrigger::Refresh,
            _ = sleep_until(next_tick) => TickTrigger::Periodic,
        };
        if !lifecycle.begin_tick(generation) {
            break;
        }
        handler.lock().await.on_tick(trigger).await;
        lifecycle.end_tick();

        if trigger == TickTrigger::Periodic {
            next_tick = Instant::now() + period;
        }
    }
    lifecycle.finish(generation);
    debug!("Sampling loop {} exited", generation);
}
