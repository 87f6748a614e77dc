//! JSON fetching over HTTP GET.
//!
//! Uses the curl crate (libcurl) with a blocking easy handle. Each call
//! re-encodes the URL, then retries request-level failures under the
//! configured backoff before giving up on the URL.

mod error;

pub use error::FetchError;

use std::time::Duration;

use crate::retry::{self, RetryPolicy};
use crate::url_model;

/// Fetches URLs and decodes their bodies as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonFetcher {
    policy: RetryPolicy,
    timeout: Option<Duration>,
}

impl JsonFetcher {
    pub fn new(policy: RetryPolicy, timeout: Option<Duration>) -> Self {
        Self { policy, timeout }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Encodes `url`, GETs it with retry, and parses the body as JSON.
    ///
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    pub fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let encoded = url_model::encode_url(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!("GET {} (from {})", encoded, url);

        let body = retry::run_with_retry(&self.policy, url, |_attempt| {
            get_body(&encoded, self.timeout)
        })?;

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Performs one GET and returns the body of a 2xx response.
///
/// Follows redirects. No timeout is set unless `timeout` is given.
pub fn get_body(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(t) = timeout {
        easy.timeout(t)?;
    }

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            status: code,
            url: url.to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(body)
}
