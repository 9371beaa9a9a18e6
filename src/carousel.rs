use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::models::zodiac::ZodiacSign;

#[derive(Default)]
struct Rotation {
    ticks: AtomicUsize,
    paused: AtomicBool,
}

/// Rotates the featured sign through the zodiac on a fixed period.
///
/// The rotation runs as a background task from [`SignCarousel::start`] until
/// [`SignCarousel::stop`] is called or the carousel is dropped.
pub struct SignCarousel {
    rotation: Arc<Rotation>,
    task: JoinHandle<()>,
}

impl SignCarousel {
    pub fn start(period: Duration) -> Self {
        let rotation = Arc::new(Rotation::default());
        let ticker = rotation.clone();

        let task = tokio::spawn(async move {
            let mut clock = interval(period);
            clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately
            clock.tick().await;

            loop {
                clock.tick().await;
                if ticker.paused.load(Ordering::Relaxed) {
                    continue;
                }
                let ticks = ticker.ticks.fetch_add(1, Ordering::Relaxed) + 1;
                let sign = ZodiacSign::ALL[ticks % ZodiacSign::ALL.len()];
                debug!(%sign, "featured sign advanced");
            }
        });

        info!(period_ms = period.as_millis() as u64, "sign carousel started");
        Self { rotation, task }
    }

    pub fn current(&self) -> ZodiacSign {
        let ticks = self.rotation.ticks.load(Ordering::Relaxed);
        ZodiacSign::ALL[ticks % ZodiacSign::ALL.len()]
    }

    /// Holds the current sign, e.g. while the pointer hovers over it.
    pub fn pause(&self) {
        self.rotation.paused.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.rotation.paused.store(false, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.rotation.paused.load(Ordering::Relaxed)
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for SignCarousel {
    fn drop(&mut self) {
        self.task.abort();
    }
}
