use crate::RetryPolicy;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BlockingConfig {
    pub hosts_url: String,

    /// Expiry-based so a machine waking from sleep refreshes on the next query.
    pub refresh_interval_secs: u64,

    pub retry_delay_ms: u64,

    /// Upper bound for one download of the hosts file.
    pub fetch_timeout_secs: u64,

    /// Attempts per background refresh. Negative retries forever.
    pub refresh_max_attempts: i64,

    /// Attempts for the first load at startup. Negative retries forever.
    pub startup_max_attempts: i64,
}

impl BlockingConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn refresh_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from_max_attempts(
            self.refresh_max_attempts,
            Duration::from_millis(self.retry_delay_ms),
        )
    }

    pub fn startup_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from_max_attempts(
            self.startup_max_attempts,
            Duration::from_millis(self.retry_delay_ms),
        )
    }
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            hosts_url: "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts"
                .to_string(),
            refresh_interval_secs: 24 * 60 * 60,
            retry_delay_ms: 2000,
            fetch_timeout_secs: 30,
            refresh_max_attempts: 3,
            startup_max_attempts: -1,
        }
    }
}
