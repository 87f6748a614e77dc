//! Error record written in place of a response.

use serde::{Deserialize, Serialize};

use crate::fetch::FetchError;

/// `{"error": ..., "url": ..., "details": ...}`; `details` is the raw HTTP
/// body when the failure carried a response, else null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
    pub url: String,
    pub details: Option<String>,
}

impl ErrorRecord {
    pub fn from_fetch_error(url: &str, err: &FetchError) -> Self {
        Self {
            error: err.to_string(),
            url: url.to_string(),
            details: err.details().map(str::to_string),
        }
    }
}
