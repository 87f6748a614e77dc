//! URL modeling and filename derivation.
//!
//! Normalizes query-string encoding before a request goes out and derives
//! deterministic, filesystem-safe response filenames from a URL.

mod encode;
mod filename;
mod query;
mod sanitize;

use serde::{Deserialize, Serialize};

use crate::checksum;

pub use encode::encode_url;
pub use filename::create_filename;
pub use query::{parse_query, serialize_query, QueryMap};
pub use sanitize::{sanitize_component, truncate_chars};

/// Prefix for files holding an error record instead of a response.
pub const ERROR_PREFIX: &str = "error_";

/// How response filenames are derived from a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameScheme {
    /// Path plus first value of each query parameter, joined with `_`.
    #[default]
    Path,
    /// Lowercase hex SHA-256 of the raw URL.
    Sha256,
}

/// Derives the success filename for `url` under `scheme`.
pub fn derive_filename(url: &str, scheme: FilenameScheme) -> String {
    match scheme {
        FilenameScheme::Path => create_filename(url),
        FilenameScheme::Sha256 => format!("{}.json", checksum::sha256_hex(url.as_bytes())),
    }
}

/// Derives the error-record filename for `url` (the success name with `error_` in front).
pub fn derive_error_filename(url: &str, scheme: FilenameScheme) -> String {
    format!("{}{}", ERROR_PREFIX, derive_filename(url, scheme))
}
