#![allow(dead_code)]

use async_trait::async_trait;
use dohhole_application::ports::{CacheMaintenancePort, CacheReapOutcome};
use dohhole_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

pub struct MockCacheMaintenancePort {
    reap_call_count: Arc<AtomicU64>,
    should_fail_reap: Arc<AtomicBool>,
    reap_outcome: CacheReapOutcome,
}

impl MockCacheMaintenancePort {
    pub fn new() -> Self {
        Self {
            reap_call_count: Arc::new(AtomicU64::new(0)),
            should_fail_reap: Arc::new(AtomicBool::new(false)),
            reap_outcome: CacheReapOutcome::default(),
        }
    }

    pub fn with_reap_outcome(mut self, outcome: CacheReapOutcome) -> Self {
        self.reap_outcome = outcome;
        self
    }

    pub fn set_should_fail_reap(&self, fail: bool) {
        self.should_fail_reap.store(fail, Ordering::SeqCst);
    }

    pub fn reap_call_count(&self) -> u64 {
        self.reap_call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCacheMaintenancePort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheMaintenancePort for MockCacheMaintenancePort {
    async fn run_reap_cycle(&self) -> Result<CacheReapOutcome, DomainError> {
        self.reap_call_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail_reap.load(Ordering::SeqCst) {
            return Err(DomainError::ConfigError("mock reap failure".to_string()));
        }

        Ok(self.reap_outcome.clone())
    }
}
