//! URL list loading: one URL per non-blank line, file order preserved.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads the URL list at `path`.
///
/// A missing or unreadable file is an error for the whole run.
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL list: {}", path.display()))?;
    Ok(parse_url_list(&data))
}

/// Splits list text into trimmed URLs, skipping blank lines and `#` comments.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn keeps_order_and_trims() {
        let urls = parse_url_list("  http://a/1 \nhttp://b/2\r\n\thttp://c/3\t\n");
        assert_eq!(urls, vec!["http://a/1", "http://b/2", "http://c/3"]);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let urls = parse_url_list("\n\n# quotes\nhttp://a/1\n   \n  # disabled\nhttp://b/2");
        assert_eq!(urls, vec!["http://a/1", "http://b/2"]);
    }

    #[test]
    fn loads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"http://api.example.com/data?x=1&y=2\n\n").unwrap();
        f.flush().unwrap();
        let urls = load_url_list(f.path()).unwrap();
        assert_eq!(urls, vec!["http://api.example.com/data?x=1&y=2"]);
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_url_list(&dir.path().join("urls.txt")).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read URL list"));
    }
}
