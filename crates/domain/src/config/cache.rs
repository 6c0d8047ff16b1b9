use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Sweep interval for expired entries.
    pub reap_interval_secs: u64,
}

impl CacheConfig {
    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            reap_interval_secs: 300,
        }
    }
}
