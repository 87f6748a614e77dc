//! Response filename derivation from URL path and query.

use url::Url;

use super::query::parse_query;
use super::sanitize::{sanitize_component, truncate_chars};

/// Maximum length of the filename stem (before `.json`).
const MAX_STEM_CHARS: usize = 200;

/// Derives a deterministic filename from `url`'s path and the first value of
/// each query parameter.
///
/// `http://api.example.com/data?x=1&y=2` becomes `_data_x_1_y_2.json`. The stem
/// is cut at 200 characters, so distinct URLs may share a name; the later
/// write wins. Never fails: unparseable input falls back to a manual split.
pub fn create_filename(url: &str) -> String {
    let (path, query) = split_path_and_query(url);

    let params: Vec<String> = parse_query(&query)
        .into_iter()
        .filter_map(|(name, values)| {
            values
                .into_iter()
                .next()
                .map(|first| format!("{}_{}", name, first))
        })
        .collect();

    let stem = sanitize_component(&format!("{}_{}", path.replace('/', "_"), params.join("_")));
    format!("{}.json", truncate_chars(&stem, MAX_STEM_CHARS))
}

/// Returns (path, raw query) of `url`; the fragment is ignored.
fn split_path_and_query(url: &str) -> (String, String) {
    if let Ok(parsed) = Url::parse(url) {
        return (
            parsed.path().to_string(),
            parsed.query().unwrap_or("").to_string(),
        );
    }

    let without_fragment = url.split('#').next().unwrap_or("");
    let (before_query, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));
    let after_scheme = before_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(before_query);
    let path = after_scheme.find('/').map(|i| &after_scheme[i..]).unwrap_or("");
    (path.to_string(), query.to_string())
}
