use hickory_proto::op::Message;
use hickory_proto::serialize::binary::BinEncodable;
use rustc_hash::FxHasher;
use std::hash::Hasher;
use tracing::debug;

/// Fingerprint of the first question of `message`.
///
/// FxHash is unseeded, so the same question always maps to the same key.
/// Returns `None` when there is no question or it cannot be serialized; such
/// messages are never cached.
pub fn cache_key(message: &Message) -> Option<u64> {
    let question = message.queries().first()?;

    let bytes = match question.to_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "Failed to serialize question for cache key");
            return None;
        }
    };

    let mut hasher = FxHasher::default();
    hasher.write(&bytes);
    Some(hasher.finish())
}
