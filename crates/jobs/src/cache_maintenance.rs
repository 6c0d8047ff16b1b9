use dohhole_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_REAP_INTERVAL_SECS: u64 = 300;

/// Periodically drops expired response cache entries.
pub struct CacheMaintenanceJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    reap_interval: Duration,
    shutdown: CancellationToken,
}

impl CacheMaintenanceJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            reap_interval: Duration::from_secs(DEFAULT_REAP_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, reap_interval: Duration) -> Self {
        self.reap_interval = reap_interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawn the reap loop. The first cycle runs one interval after start.
    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.reap_interval.as_secs(),
            "Starting cache reaper"
        );

        let job = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(Instant::now() + job.reap_interval, job.reap_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("CacheMaintenanceJob (reap): shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match job.maintenance.run_reap_cycle().await {
                            Ok(outcome) => {
                                debug!(
                                    entries_removed = outcome.entries_removed,
                                    cache_size = outcome.cache_size,
                                    "Cache reap cycle completed"
                                );
                            }
                            Err(e) => {
                                error!(error = %e, "Cache reap cycle failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
