use async_trait::async_trait;

#[async_trait]
pub trait DenylistPort: Send + Sync {
    /// Membership check against the current snapshot. `hostname` may carry a
    /// trailing dot.
    fn is_blocked(&self, hostname: &str) -> bool;

    /// Refresh the denylist if it has expired.
    ///
    /// Returns `true` when the list is fresh (or was just refreshed) and `false`
    /// when the refresh failed or another refresh is already in flight.
    async fn ensure_fresh(&self) -> bool;

    fn blocked_count(&self) -> usize;
}
