//! Retry loop: run a closure until success or policy says stop.

use std::time::Duration;

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::fetch::FetchError;

/// Runs `f` until it succeeds or the retry policy says to stop, sleeping the
/// backoff delay between attempts. `url` is only used for reporting.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, url: &str, f: F) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Result<T, FetchError>,
{
    run_with_retry_sleep(policy, url, std::thread::sleep, f)
}

/// Like `run_with_retry` with an injectable sleep.
///
/// `f` receives the 0-based attempt number.
pub fn run_with_retry_sleep<T, F, S>(
    policy: &RetryPolicy,
    url: &str,
    mut sleep: S,
    mut f: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Result<T, FetchError>,
    S: FnMut(Duration),
{
    let max = policy.max_retries.max(1);
    let mut attempt = 0u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            "attempt {}/{} for {} failed: {}; retrying in {:?}",
                            attempt + 1,
                            max,
                            url,
                            e,
                            d
                        );
                        println!(
                            "retry {}/{} for {} in {}s: {}",
                            attempt + 1,
                            max,
                            url,
                            d.as_secs_f64(),
                            e
                        );
                        sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error() -> FetchError {
        FetchError::Http {
            status: 500,
            url: "http://h/p?".to_string(),
            body: "boom".to_string(),
        }
    }

    #[test]
    fn persistent_failure_sleeps_one_then_two_seconds() {
        let policy = RetryPolicy::default();
        let mut sleeps = Vec::new();
        let mut calls = 0;
        let result: Result<(), _> = run_with_retry_sleep(
            &policy,
            "http://h/p",
            |d| sleeps.push(d),
            |_| {
                calls += 1;
                Err(server_error())
            },
        );
        assert!(matches!(result, Err(FetchError::Http { status: 500, .. })));
        assert_eq!(calls, 3);
        assert_eq!(sleeps, vec![Duration::from_secs(1), Duration::from_secs(2)]);
    }

    #[test]
    fn success_after_failure() {
        let policy = RetryPolicy::default();
        let mut sleeps = Vec::new();
        let result = run_with_retry_sleep(
            &policy,
            "http://h/p",
            |d| sleeps.push(d),
            |attempt| {
                if attempt == 0 {
                    Err(server_error())
                } else {
                    Ok(attempt)
                }
            },
        );
        assert_eq!(result.unwrap(), 1);
        assert_eq!(sleeps, vec![Duration::from_secs(1)]);
    }

    #[test]
    fn terminal_error_is_not_retried() {
        let policy = RetryPolicy::default();
        let mut calls = 0;
        let result: Result<(), _> = run_with_retry_sleep(
            &policy,
            "http://h/p",
            |_| panic!("no sleep expected"),
            |_| {
                calls += 1;
                let e = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
                Err(FetchError::Json(e))
            },
        );
        assert!(matches!(result, Err(FetchError::Json(_))));
        assert_eq!(calls, 1);
    }
}
