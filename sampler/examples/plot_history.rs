use std::sync::Arc;
use uuid::Uuid;

use common::types::SampleField;
use publisher::Listener;
use sampler_rs::{run_mock_service, EventKind, SamplerConfig, SamplerEvent};
use test_utils::sinks::Plot1D;

#[tokio::main]
async fn main() {
    env_logger::init();

    let plot_refresh_period_millis = 200;
    let plot_window_size_samples = 200;
    let plot_1d = Plot1D::new(
        "Acceleration",
        vec![
            SampleField::AccelerationMagnitude,
            SampleField::AccelerationRateOfChange,
        ],
        plot_window_size_samples,
    );
    plot_1d.start(plot_refresh_period_millis);

    let config = SamplerConfig::default().with_period_millis(250);
    let add_sensor_noise = true;
    let run_for_millis = 60_000;
    let (handle, sampler) =
        run_mock_service(&config, add_sensor_noise, Some(run_for_millis)).unwrap();

    let mut listener = Listener::new({
        let plot_1d = plot_1d.clone();
        move |_id: Uuid, event: Arc<SamplerEvent>| {
            let plot_1d = plot_1d.clone();
            async move {
                if let SamplerEvent::NewSample(sample) = event.as_ref() {
                    plot_1d.add_sample(sample);
                }
            }
        }
    });
    sampler
        .register_listener(&mut listener, EventKind::NewSample)
        .unwrap();

    handle.await.unwrap();
}
