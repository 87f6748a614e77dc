//! CLI for respfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use respfetch_core::config;
use std::path::PathBuf;

use commands::{run_batch, run_encode, run_filename, RunOverrides};

/// Top-level CLI for respfetch.
#[derive(Debug, Parser)]
#[command(name = "respfetch")]
#[command(about = "Fetch JSON responses for a list of URLs into fixture files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every URL in the input list and write one JSON file per URL.
    Run {
        /// URL list (one per line). Defaults to the configured input, `urls.txt`.
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Output directory. Defaults to the configured output, `responses`.
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Attempts per URL, including the first (default 3).
        #[arg(long, value_name = "N")]
        max_retries: Option<u32>,
        /// Whole-request timeout in seconds (default: none).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
        /// Name files by SHA-256 of the URL instead of its path and query.
        #[arg(long)]
        sha256_names: bool,
        /// Delete `.json` files in the output directory not written by this run.
        #[arg(long)]
        prune_stale: bool,
    },

    /// Print the request URL after query re-encoding.
    Encode {
        /// URL to encode.
        url: String,
    },

    /// Print the response filename derived from a URL.
    Filename {
        /// URL to derive the name from.
        url: String,
        /// Use the SHA-256 naming scheme.
        #[arg(long)]
        sha256_names: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                input,
                output,
                max_retries,
                timeout,
                sha256_names,
                prune_stale,
            } => {
                let overrides = RunOverrides {
                    input,
                    output,
                    max_retries,
                    timeout_secs: timeout,
                    sha256_names,
                };
                run_batch(overrides.apply(cfg), prune_stale).await?;
            }
            CliCommand::Encode { url } => run_encode(&url)?,
            CliCommand::Filename { url, sha256_names } => {
                run_filename(&url, sha256_names, cfg.scheme())
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
