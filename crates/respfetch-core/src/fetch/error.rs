//! Per-URL fetch error type.

/// Error returned when fetching one URL fails. Classified for retry decisions
/// before the orchestrator turns it into an error record.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL could not be parsed (or has no host).
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Curl reported an error (connection, DNS, timeout, etc.).
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {status} for url: {url}")]
    Http { status: u32, url: String, body: String },
    /// The 2xx response body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Raw response body, when the failure carried an HTTP response.
    pub fn details(&self) -> Option<&str> {
        match self {
            FetchError::Http { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}
