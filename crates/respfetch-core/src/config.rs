use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;
use crate::url_model::FilenameScheme;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per URL (including the first).
    pub max_retries: u32,
    /// Base delay in seconds; attempt `n` (0-based) waits `base * 2^n`.
    pub base_delay_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_secs: 1.0,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        // Too large for a Duration (or infinite) saturates; NaN and negatives mean no delay.
        let base_delay = if self.base_delay_secs > 0.0 {
            Duration::try_from_secs_f64(self.base_delay_secs).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay,
        }
    }
}

/// Global configuration loaded from `~/.config/respfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Newline-delimited URL list, relative to the working directory.
    pub input: PathBuf,
    /// Directory receiving one JSON file per URL.
    pub output_dir: PathBuf,
    /// Whole-request timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// How output filenames are derived: "path" (default) or "sha256".
    #[serde(default)]
    pub filename_scheme: Option<FilenameScheme>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("urls.txt"),
            output_dir: PathBuf::from("responses"),
            timeout_secs: None,
            filename_scheme: None,
            retry: None,
        }
    }
}

impl FetchConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone().unwrap_or_default().policy()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn scheme(&self) -> FilenameScheme {
        self.filename_scheme.unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("respfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
