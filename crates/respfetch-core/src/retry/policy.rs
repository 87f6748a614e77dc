use std::time::Duration;

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network-level failure (connection refused, DNS, timeout, reset).
    Transport,
    /// Server answered with a non-2xx status.
    BadStatus(u32),
    /// Anything the request layer did not cause (bad URL, bad body). Not retried.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff without a cap: attempt `n` (0-based) waits `base * 2^n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first). Zero behaves like one.
    pub max_retries: u32,
    /// Delay before the second attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Decide what to do after `attempt` (0-based) failed with `kind`.
    ///
    /// The last allowed attempt never retries, so no sleep follows it.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt.saturating_add(1) >= self.max_retries {
            return RetryDecision::NoRetry;
        }

        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Transport | ErrorKind::BadStatus(_) => {
                let factor = 1u32 << attempt.min(16);
                RetryDecision::RetryAfter(self.base_delay.saturating_mul(factor))
            }
        }
    }
}
