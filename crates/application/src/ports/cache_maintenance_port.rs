use async_trait::async_trait;
use dohhole_domain::DomainError;

/// Outcome of a cache reap cycle.
#[derive(Debug, Default, Clone)]
pub struct CacheReapOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic cache maintenance.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    /// Remove every entry whose expiry has passed.
    async fn run_reap_cycle(&self) -> Result<CacheReapOutcome, DomainError>;
}
