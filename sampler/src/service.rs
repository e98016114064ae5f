use log::{error, info};
use std::io;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::Notify;
use uuid::Uuid;

use common::traits::{Clock, Notifiable};
use common::types::{DerivedSample, MonotonicClock, SampleField};
use sensor_sources::sensor_set::GAUSSIAN_SENSOR_STDEV;
use sensor_sources::SensorSet;

use crate::config::SamplerConfig;
use crate::errors::SamplerError;
use crate::events::{EventKind, SamplerEvent};
use crate::export;
use crate::fusion::SampleFusion;
use crate::history::History;
use crate::pipeline::{SampleStore, SamplingPipeline};
use crate::scheduler::SamplingScheduler;
use crate::shutdown;

/// Sampling service: drives the tick loop and answers the presentation queries.
pub struct SamplerService {
    scheduler: SamplingScheduler<SamplingPipeline>,
    store: Arc<SampleStore>,
    tag: String,
}

impl SamplerService {
    /// Creates a stopped service timestamping samples with a [`MonotonicClock`].
    pub fn new(config: &SamplerConfig, sensors: SensorSet) -> Result<Self, SamplerError> {
        Self::with_clock(config, sensors, Arc::new(MonotonicClock::new()))
    }

    pub fn with_clock(
        config: &SamplerConfig,
        sensors: SensorSet,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SamplerError> {
        config.validate()?;
        let history = match config.window()? {
            Some(window) => History::with_window(window),
            None => History::new(),
        };
        let store = Arc::new(SampleStore::new(history));
        let pipeline = SamplingPipeline::new(SampleFusion::new(sensors), clock, store.clone());

        Ok(Self {
            scheduler: SamplingScheduler::new(pipeline, config.period()),
            store,
            tag: config.tag.clone(),
        })
    }

    pub fn get_tag(&self) -> &str {
        &self.tag
    }

    /// Starts sampling. See [`SamplingScheduler::start`].
    pub fn start(&self) -> bool {
        self.scheduler.start()
    }

    pub fn stop(&self) -> bool {
        self.scheduler.stop()
    }

    /// Requests an immediate sample outside the periodic cadence.
    pub fn refresh(&self) -> bool {
        self.scheduler.refresh()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn is_tick_in_flight(&self) -> bool {
        self.scheduler.is_tick_in_flight()
    }

    pub async fn join(&self) {
        self.scheduler.join().await
    }

    /// Samples until the shutdown signal fires (Ctrl+C, or `run_for_millis` if given) or
    /// until the service is stopped elsewhere.
    pub async fn run(&self, run_for_millis: Option<u64>) {
        let abort_signal = Arc::new(Notify::new());
        let shutdown_listener = shutdown::listen_for_shutdown(abort_signal.clone(), run_for_millis);

        self.start();
        tokio::select! {
            _ = abort_signal.notified() => {
                self.stop();
            }
            _ = self.join() => {}
        }
        shutdown_listener.abort();
        self.join().await;
        info!("{} service finished", self.tag);
    }

    /// Last successful sample. Failed ticks leave it unchanged.
    pub async fn latest(&self) -> Option<DerivedSample> {
        self.store.history.read().await.latest().cloned()
    }

    /// All stored samples, oldest first.
    pub async fn history(&self) -> Vec<DerivedSample> {
        self.store.history.read().await.samples()
    }

    pub async fn history_len(&self) -> usize {
        self.store.history.read().await.len()
    }

    /// `(timestamp, value)` series of one field, oldest first.
    pub async fn project(&self, field: SampleField) -> Vec<(f64, f64)> {
        self.store.history.read().await.project(field)
    }

    /// Number of ticks abandoned because of a sensor failure.
    pub fn failed_ticks(&self) -> u64 {
        self.store.failed_ticks.load(Ordering::Relaxed)
    }

    /// Writes the history as CSV. See [`export::write_csv`].
    pub async fn export_csv<W: io::Write>(&self, writer: W) -> Result<(), SamplerError> {
        let history = self.store.history.read().await;
        export::write_csv(&history, writer)?;
        Ok(())
    }

    pub fn register_listener(
        &self,
        listener: &mut dyn Notifiable<SamplerEvent>,
        kind: EventKind,
    ) -> Result<Uuid, SamplerError> {
        Ok(self.store.publishers.add_listener(listener, &kind)?)
    }

    pub fn unregister_listener(&self, id: Uuid) -> Result<(), SamplerError> {
        Ok(self.store.publishers.remove_listener(id)?)
    }
}

/// Builds the sensors described by `config`: HTTP readers if a device url is set, mock
/// readers otherwise.
pub fn sensors_from_config(config: &SamplerConfig) -> Result<SensorSet, SamplerError> {
    if let Some(device_url) = &config.device_url {
        return Ok(SensorSet::http(device_url)?);
    }
    let sensors = match config.mock.noise_stdev {
        Some(stdev) => SensorSet::noisy_mock(stdev)?,
        None => SensorSet::mock(),
    };
    if config.mock.failure_rate > 0.0 {
        Ok(sensors.with_failure_rate(config.mock.failure_rate))
    } else {
        Ok(sensors)
    }
}

/// Spawns a service sampling `sensors` until `run_for_millis` elapses, or until Ctrl+C if
/// `None`.
///
/// # Returns
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` completing once the sampling loop has exited.
/// * An `Arc<SamplerService>` instance, to query the history and register listeners.
pub fn run_service_with_sensors(
    config: &SamplerConfig,
    sensors: SensorSet,
    run_for_millis: Option<u64>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<SamplerService>), SamplerError> {
    let service = Arc::new(SamplerService::new(config, sensors)?);
    let handle = tokio::spawn({
        let service = service.clone();
        async move {
            service.run(run_for_millis).await;
        }
    });
    Ok((handle, service))
}

/// Starts the sampler described by `config`, running until Ctrl+C.
///
/// A ClientBuild error is returned if the http client connecting with the device cannot be
/// created.
pub fn run_service(
    config: &SamplerConfig,
) -> Result<(tokio::task::JoinHandle<()>, Arc<SamplerService>), SamplerError> {
    let sensors = sensors_from_config(config).map_err(|e| {
        error!("Error creating sensors: {}", e);
        e
    })?;
    run_service_with_sensors(config, sensors, None)
}

/// Starts a sampler polling mock sensors, with Gaussian noise if `add_noise` is set.
pub fn run_mock_service(
    config: &SamplerConfig,
    add_noise: bool,
    run_for_millis: Option<u64>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<SamplerService>), SamplerError> {
    let sensors = if add_noise {
        SensorSet::noisy_mock(config.mock.noise_stdev.unwrap_or(GAUSSIAN_SENSOR_STDEV))?
    } else {
        SensorSet::mock()
    };
    run_service_with_sensors(config, sensors, run_for_millis)
}
