//! Fixed-delay retry for operations whose failure the caller decides how to
//! treat (fatal at startup, soft during background refresh).

use dohhole_domain::RetryPolicy;
use std::fmt::Display;
use std::future::Future;
use tracing::warn;

/// Run `operation` until it succeeds or `policy` runs out of attempts.
///
/// Every failed attempt is logged with its 1-based index. Sleeps `policy.delay`
/// between attempts, never after the last one.
pub async fn retry_with_output<T, E, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut operation: F,
) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt: u32 = 0;

    while policy.allows(attempt) {
        match operation().await {
            Ok(output) => return Some(output),
            Err(e) => {
                warn!(attempt = attempt.saturating_add(1), error = %e, "Failed {}", label);
            }
        }

        if policy.is_final(attempt) {
            break;
        }

        attempt = attempt.saturating_add(1);
        tokio::time::sleep(policy.delay).await;
    }

    None
}

/// [`retry_with_output`] for operations with no output.
pub async fn retry<E, F, Fut>(policy: &RetryPolicy, label: &str, operation: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    retry_with_output(policy, label, operation).await.is_some()
}
