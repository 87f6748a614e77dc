//! `respfetch encode <url>`.

use anyhow::{Context, Result};
use respfetch_core::url_model;

pub fn run_encode(url: &str) -> Result<()> {
    let encoded = url_model::encode_url(url).with_context(|| format!("invalid URL: {}", url))?;
    println!("{}", encoded);
    Ok(())
}
