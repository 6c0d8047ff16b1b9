use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAttempts {
    /// Give up after this many attempts. Zero attempts never runs the operation.
    Bounded(u32),
    /// Keep trying until the operation succeeds.
    Unbounded,
}

/// Fixed-delay retry policy (no backoff).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: RetryAttempts,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn bounded(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: RetryAttempts::Bounded(attempts),
            delay,
        }
    }

    pub fn unbounded(delay: Duration) -> Self {
        Self {
            attempts: RetryAttempts::Unbounded,
            delay,
        }
    }

    /// A negative count means retry forever.
    pub fn from_max_attempts(max_attempts: i64, delay: Duration) -> Self {
        if max_attempts < 0 {
            Self::unbounded(delay)
        } else {
            Self::bounded(u32::try_from(max_attempts).unwrap_or(u32::MAX), delay)
        }
    }

    /// Whether attempt number `attempt` (0-based) may run.
    pub fn allows(&self, attempt: u32) -> bool {
        match self.attempts {
            RetryAttempts::Bounded(max) => attempt < max,
            RetryAttempts::Unbounded => true,
        }
    }

    /// Whether attempt number `attempt` (0-based) is the last one allowed.
    pub fn is_final(&self, attempt: u32) -> bool {
        match self.attempts {
            RetryAttempts::Bounded(max) => attempt + 1 >= max,
            RetryAttempts::Unbounded => false,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self.attempts, RetryAttempts::Unbounded)
    }
}
