//! Batch orchestration: fetch every URL in order and persist one file per URL.
//!
//! Failures are isolated per URL: each fetch yields a `Result`, which becomes
//! either the response file or an `error_` record, and the loop moves on.
//! Only filesystem failures end the batch.

mod record;

pub use record::ErrorRecord;

use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::fetch::FetchError;
use crate::storage;
use crate::url_model::{self, FilenameScheme};

/// What happened to one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// Response saved to `path`.
    Saved { url: String, path: PathBuf },
    /// Error record saved to `path`.
    Failed {
        url: String,
        path: PathBuf,
        message: String,
    },
}

impl UrlOutcome {
    pub fn url(&self) -> &str {
        match self {
            UrlOutcome::Saved { url, .. } | UrlOutcome::Failed { url, .. } => url,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            UrlOutcome::Saved { path, .. } | UrlOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UrlOutcome::Saved { .. })
    }

    /// One-line status as printed to stdout.
    pub fn status_line(&self) -> String {
        match self {
            UrlOutcome::Saved { url, path } => format!("ok {} -> {}", url, path.display()),
            UrlOutcome::Failed { url, message, .. } => format!("error {}: {}", url, message),
        }
    }
}

/// Per-URL outcomes of a batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<UrlOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Every file written in this batch (response or error record).
    pub fn written_paths(&self) -> HashSet<PathBuf> {
        self.outcomes.iter().map(|o| o.path().to_path_buf()).collect()
    }
}

/// Fetches each URL with `fetch` and writes the result under `out_dir`.
///
/// `out_dir` is created once up front. Success writes `<name>`, failure writes
/// `error_<name>`, where `<name>` comes from `scheme`. A status line is printed
/// per URL. Returns an error only if the directory or a file cannot be written.
pub fn run_batch<F>(
    urls: &[String],
    out_dir: &Path,
    scheme: FilenameScheme,
    mut fetch: F,
) -> Result<BatchSummary>
where
    F: FnMut(&str) -> Result<serde_json::Value, FetchError>,
{
    storage::ensure_dir(out_dir)?;

    let mut summary = BatchSummary::default();
    for (i, url) in urls.iter().enumerate() {
        tracing::debug!("fetching {}/{}: {}", i + 1, urls.len(), url);

        let outcome = match fetch(url) {
            Ok(value) => {
                let path = out_dir.join(url_model::derive_filename(url, scheme));
                storage::write_json(&path, &value)?;
                tracing::info!("saved {} -> {}", url, path.display());
                UrlOutcome::Saved {
                    url: url.clone(),
                    path,
                }
            }
            Err(err) => {
                let record = ErrorRecord::from_fetch_error(url, &err);
                let path = out_dir.join(url_model::derive_error_filename(url, scheme));
                storage::write_json(&path, &record)?;
                tracing::warn!("fetch failed for {}: {}", url, err);
                UrlOutcome::Failed {
                    url: url.clone(),
                    path,
                    message: record.error,
                }
            }
        };

        println!("{}", outcome.status_line());
        summary.outcomes.push(outcome);
    }

    Ok(summary)
}
