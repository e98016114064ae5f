//! Prints every sample as a table row and saves the history as CSV on exit.
//!
//! Usage: `cargo run --example dashboard -- [config.json] [output.csv]`

use log::info;
use std::fs::File;
use std::sync::Arc;
use uuid::Uuid;

use publisher::Listener;
use sampler_rs::{run_service, EventKind, SamplerConfig, SamplerEvent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SamplerConfig::from_file(path)?,
        None => SamplerConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| "sensor_history.csv".to_string());

    let (handle, sampler) = run_service(&config)?;

    println!(
        "{:>10} {:>8} {:>8} {:>8} {:>6} {:>10} {:>10} {:>8} {:>8}",
        "t [s]", "ax", "ay", "az", "vib", "lat", "lon", "|a|", "d|a|/dt"
    );
    let mut sample_listener = Listener::new(|_id: Uuid, event: Arc<SamplerEvent>| async move {
        if let SamplerEvent::NewSample(sample) = event.as_ref() {
            let accel = sample.get_accelerometer();
            println!(
                "{:>10.3} {:>8.3} {:>8.3} {:>8.3} {:>6} {:>10.5} {:>10.5} {:>8.3} {:>8.3}",
                sample.get_timestamp(),
                accel.x(),
                accel.y(),
                accel.z(),
                sample.is_vibrating(),
                sample.get_latitude(),
                sample.get_longitude(),
                sample.get_acceleration_magnitude(),
                sample.get_acceleration_rate_of_change()
            );
        }
    });
    let mut failure_listener = Listener::new(|_id: Uuid, event: Arc<SamplerEvent>| async move {
        if let SamplerEvent::ReadFailure(failure) = event.as_ref() {
            eprintln!("{}", failure);
        }
    });
    sampler.register_listener(&mut sample_listener, EventKind::NewSample)?;
    sampler.register_listener(&mut failure_listener, EventKind::ReadFailure)?;

    handle.await?;

    sampler.export_csv(File::create(&output)?).await?;
    info!(
        "Saved {} samples to {} ({} failed ticks)",
        sampler.history_len().await,
        output,
        sampler.failed_ticks()
    );
    Ok(())
}
