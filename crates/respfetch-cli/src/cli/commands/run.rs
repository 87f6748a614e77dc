//! `respfetch run` – fetch the URL list into the output directory.

use anyhow::{Context, Result};
use respfetch_core::batch;
use respfetch_core::config::FetchConfig;
use respfetch_core::fetch::JsonFetcher;
use respfetch_core::storage;
use respfetch_core::url_list;
use respfetch_core::url_model::FilenameScheme;
use std::path::PathBuf;

/// Command-line values that take precedence over config.toml.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub max_retries: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub sha256_names: bool,
}

impl RunOverrides {
    pub fn apply(self, mut cfg: FetchConfig) -> FetchConfig {
        if let Some(input) = self.input {
            cfg.input = input;
        }
        if let Some(output) = self.output {
            cfg.output_dir = output;
        }
        if let Some(n) = self.max_retries {
            let mut retry = cfg.retry.take().unwrap_or_default();
            retry.max_retries = n;
            cfg.retry = Some(retry);
        }
        if self.timeout_secs.is_some() {
            cfg.timeout_secs = self.timeout_secs;
        }
        if self.sha256_names {
            cfg.filename_scheme = Some(FilenameScheme::Sha256);
        }
        cfg
    }
}

pub async fn run_batch(cfg: FetchConfig, prune_stale: bool) -> Result<()> {
    let urls = url_list::load_url_list(&cfg.input)?;
    tracing::info!(
        "fetching {} urls from {} into {}",
        urls.len(),
        cfg.input.display(),
        cfg.output_dir.display()
    );
    println!("Fetching {} URLs...", urls.len());

    let output_dir = cfg.output_dir.clone();
    let summary = tokio::task::spawn_blocking(move || {
        let fetcher = JsonFetcher::new(cfg.retry_policy(), cfg.timeout());
        tracing::debug!("retry policy: {:?}", fetcher.policy());
        batch::run_batch(&urls, &cfg.output_dir, cfg.scheme(), |url| fetcher.fetch(url))
    })
    .await
    .context("batch task join")??;

    if prune_stale {
        let removed = storage::prune_stale(&output_dir, &summary.written_paths())?;
        if removed > 0 {
            println!("Removed {} stale response files", removed);
        }
    }

    println!("fetched {}, errors {}", summary.succeeded(), summary.failed());
    Ok(())
}
