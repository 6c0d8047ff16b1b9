use super::parser::parse_hosts;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use dohhole_application::ports::{DenylistPort, DenylistSourcePort};
use dohhole_application::services::retry;
use dohhole_domain::{normalize_hostname, DomainError, RetryPolicy};
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

const REFRESH_LABEL: &str = "getting blocked hosts";

/// Immutable set of blocked hostnames, without trailing dots.
#[derive(Debug, Default)]
pub struct DenylistSnapshot {
    hosts: FxHashSet<String>,
}

impl DenylistSnapshot {
    pub fn new(hosts: FxHashSet<String>) -> Self {
        Self { hosts }
    }

    #[inline]
    pub fn contains(&self, hostname: &str) -> bool {
        self.hosts.contains(hostname)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

pub struct DenylistStoreConfig {
    pub refresh_interval: Duration,
    pub refresh_policy: RetryPolicy,
    pub startup_policy: RetryPolicy,
}

/// Expiring denylist that refreshes itself lazily.
///
/// Readers load the current snapshot without locking. At most one refresh
/// runs at a time; the expiry is pushed forward before the download starts so
/// a failing source is not retried on every query.
pub struct DenylistStore {
    snapshot: ArcSwap<DenylistSnapshot>,
    source: Arc<dyn DenylistSourcePort>,
    refreshing: AtomicBool,
    epoch: Instant,
    expires_at_ms: AtomicU64,
    config: DenylistStoreConfig,
}

impl DenylistStore {
    pub fn new(source: Arc<dyn DenylistSourcePort>, config: DenylistStoreConfig) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(DenylistSnapshot::default()),
            source,
            refreshing: AtomicBool::new(false),
            epoch: Instant::now(),
            expires_at_ms: AtomicU64::new(0),
            config,
        }
    }

    pub fn is_blocked(&self, hostname: &str) -> bool {
        self.snapshot.load().contains(normalize_hostname(hostname))
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed_ms() >= self.expires_at_ms.load(Ordering::Acquire)
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// Refresh if expired, retrying with the background policy.
    ///
    /// Returns `false` right away while another refresh is in flight, and
    /// `true` without I/O while the list is fresh.
    pub async fn ensure_fresh(&self) -> bool {
        if self.is_refreshing() {
            return false;
        }
        if !self.is_expired() {
            return true;
        }
        self.refresh(&self.config.refresh_policy).await
    }

    /// First load at startup, retrying with the startup policy.
    pub async fn ensure_loaded(&self) -> bool {
        if self.is_refreshing() {
            return false;
        }
        if !self.is_expired() && !self.is_empty() {
            return true;
        }

        info!(
            source = self.source.location(),
            retry_forever = self.config.startup_policy.is_unbounded(),
            "Loading blocked hosts"
        );
        self.refresh(&self.config.startup_policy).await
    }

    async fn refresh(&self, policy: &RetryPolicy) -> bool {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        let _guard = RefreshGuard(&self.refreshing);

        // another task may have finished a refresh between our expiry check
        // and acquiring the flag
        if !self.is_expired() && !self.is_empty() {
            return true;
        }

        self.advance_expiry();

        retry(policy, REFRESH_LABEL, || self.reload()).await
    }

    async fn reload(&self) -> Result<(), DomainError> {
        let text = self.source.fetch().await?;
        let hosts = parse_hosts(&text);

        if hosts.is_empty() {
            return Err(DomainError::EmptyDenylist(self.source.location().to_string()));
        }

        let count = hosts.len();
        self.snapshot.store(Arc::new(DenylistSnapshot::new(hosts)));

        info!(
            count,
            expires_in = %format_duration(self.config.refresh_interval),
            "Got blocked hosts"
        );

        Ok(())
    }

    fn advance_expiry(&self) {
        let refresh_ms = u64::try_from(self.config.refresh_interval.as_millis()).unwrap_or(u64::MAX);
        self.expires_at_ms.store(
            self.elapsed_ms().saturating_add(refresh_ms),
            Ordering::Release,
        );
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[async_trait]
impl DenylistPort for DenylistStore {
    fn is_blocked(&self, hostname: &str) -> bool {
        DenylistStore::is_blocked(self, hostname)
    }

    async fn ensure_fresh(&self) -> bool {
        DenylistStore::ensure_fresh(self).await
    }

    fn blocked_count(&self) -> usize {
        self.len()
    }
}

/// Clears the in-flight flag when the refresh ends, however it ends.
struct RefreshGuard<'a>(&'a AtomicBool);

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// `1h 2m 3s` style rendering; zero units are left out.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}
