use std::time::Duration;

use rand::Rng;
use tokio::{sync::mpsc, time::sleep};
use tracing::info;

use crate::domain::schedule::SchedulePage;

#[derive(Debug)]
pub enum AppEvent {
    Refresh,
    RetryDue,
    PageBuilt { seq: u64, page: Box<SchedulePage> },
    RefreshFailed { seq: u64, error: String },
    Shutdown,
}

/// Sends `Refresh` every `interval`, jittered by up to 10% either way.
pub fn start_refresh_task(tx: mpsc::Sender<AppEvent>, interval: Duration) {
    tokio::spawn(async move {
        let base = interval.max(Duration::from_secs(10));
        loop {
            sleep(jittered(base)).await;
            if tx.send(AppEvent::Refresh).await.is_err() {
                break;
            }
        }
    });
}

fn jittered(base: Duration) -> Duration {
    let jitter = rand::rng().random_range(-0.1f64..0.1f64);
    base.mul_f64(1.0 + jitter).max(Duration::from_secs(1))
}

pub fn schedule_retry(tx: mpsc::Sender<AppEvent>, delay: Duration) {
    tokio::spawn(async move {
        sleep(delay.max(Duration::from_secs(1))).await;
        let _ = tx.send(AppEvent::RetryDue).await;
    });
}

pub fn spawn_shutdown_task(tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, stopping");
            let _ = tx.send(AppEvent::Shutdown).await;
        }
    });
}
