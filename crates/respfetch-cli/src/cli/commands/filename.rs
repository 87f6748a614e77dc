//! `respfetch filename <url>`.

use respfetch_core::url_model::{self, FilenameScheme};

pub fn run_filename(url: &str, sha256_names: bool, configured: FilenameScheme) {
    let scheme = if sha256_names {
        FilenameScheme::Sha256
    } else {
        configured
    };
    println!("{}", url_model::derive_filename(url, scheme));
}
