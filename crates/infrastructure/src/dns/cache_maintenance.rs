use super::cache::ResponseCache;

use async_trait::async_trait;
use dohhole_application::ports::{CacheMaintenancePort, CacheReapOutcome};
use dohhole_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct ResponseCacheMaintenance {
    cache: Arc<ResponseCache>,
}

impl ResponseCacheMaintenance {
    pub fn new(cache: Arc<ResponseCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for ResponseCacheMaintenance {
    async fn run_reap_cycle(&self) -> Result<CacheReapOutcome, DomainError> {
        let entries_removed = self.cache.reap();
        let cache_size = self.cache.len();

        debug!(entries_removed, cache_size, "Cache reap cycle finished");

        Ok(CacheReapOutcome {
            entries_removed,
            cache_size,
        })
    }
}
