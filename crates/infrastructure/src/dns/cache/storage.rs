use super::key::cache_key;
use dashmap::DashMap;
use dohhole_application::ports::ResponseCachePort;
use hickory_proto::op::Message;
use rustc_hash::FxBuildHasher;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub expires_at: Instant,
    pub response: Message,
}

impl CachedResponse {
    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Upstream responses keyed by question fingerprint.
///
/// Entries live for the lowest answer TTL of the stored response. Expired
/// entries are misses and stay in the map until [`ResponseCache::reap`].
pub struct ResponseCache {
    entries: DashMap<u64, CachedResponse, FxBuildHasher>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn get(&self, query: &Message) -> Option<Message> {
        let key = cache_key(query)?;
        let entry = self.entries.get(&key)?;

        if entry.is_expired_at(Instant::now()) {
            return None;
        }

        let mut response = entry.response.clone();
        drop(entry);

        response.set_id(query.id());
        Some(response)
    }

    pub fn set(&self, query: &Message, response: &Message) {
        let Some(key) = cache_key(query) else {
            return;
        };

        let ttl = min_answer_ttl(response);
        self.entries.insert(
            key,
            CachedResponse {
                expires_at: Instant::now() + Duration::from_secs(u64::from(ttl)),
                response: response.clone(),
            },
        );
    }

    /// Drop every expired entry. Returns the number removed.
    pub fn reap(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        debug!(entries = self.entries.len(), "Reaping dns cache");
        self.entries.retain(|key, entry| {
            if entry.is_expired_at(now) {
                debug!(key = *key, "Deleting expired cache entry");
                removed += 1;
                false
            } else {
                true
            }
        });

        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCachePort for ResponseCache {
    fn get(&self, query: &Message) -> Option<Message> {
        ResponseCache::get(self, query)
    }

    fn set(&self, query: &Message, response: &Message) {
        ResponseCache::set(self, query, response)
    }

    fn len(&self) -> usize {
        ResponseCache::len(self)
    }
}

/// Lowest TTL across the answer section, 0 when there are no answers.
fn min_answer_ttl(response: &Message) -> u32 {
    response
        .answers()
        .iter()
        .map(|record| record.ttl())
        .min()
        .unwrap_or(0)
}
