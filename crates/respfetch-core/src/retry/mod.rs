//! Retry and backoff policy.
//!
//! Classifies fetch failures into retryable and terminal, and runs a request
//! closure under bounded exponential backoff.

mod classify;
mod policy;
mod run;

pub use classify::classify;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, run_with_retry_sleep};
