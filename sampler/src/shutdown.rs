use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::Notify;

const RETRY_PERIOD_MS: u64 = 100;
const MAX_RETRIES: u64 = 10;

pub(crate) struct ShutdownSignal {
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    fn new(notify: Arc<Notify>) -> Self {
        Self { notify }
    }

    /// Notifies once after `run_for_millis`, or on Ctrl+C when no run time is given.
    async fn listen_for_shutdown(&self, run_for_millis: Option<u64>) {
        if let Some(time_to_live_millis) = run_for_millis {
            tokio::time::sleep(Duration::from_millis(time_to_live_millis)).await;
            info!("Run time of {} ms elapsed. Sending stop signal...", time_to_live_millis);
        } else {
            let mut retries = 0;
            loop {
                match signal::ctrl_c().await {
                    Ok(()) => {
                        info!("Ctrl+C received. Sending stop signal...");
                        break;
                    }
                    Err(e) => {
                        error!("Error while waiting for Ctrl+C: {}", e);
                        retries += 1;
                        if retries >= MAX_RETRIES {
                            error!("Maximum retries reached, giving up on shutdown signal");
                            return;
                        }
                        tokio::time::sleep(Duration::from_millis(RETRY_PERIOD_MS)).await;
                    }
                }
            }
        }
        self.notify.notify_one();
    }
}

pub(crate) fn listen_for_shutdown(
    notify: Arc<Notify>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let shutdown_signal = ShutdownSignal::new(notify);
        shutdown_signal.listen_for_shutdown(run_for_millis).await;
    })
}
