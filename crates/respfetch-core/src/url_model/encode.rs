//! Query-string re-encoding for outgoing requests.

use url::{Position, Url};

use super::query::{parse_query, serialize_query};

/// Normalizes the query encoding of `raw`.
///
/// Decodes the `&amp;` entity (and no other), reparses the query, and
/// reassembles `scheme://authority/path?query`. Repeated parameters are kept
/// but grouped by name. The fragment is dropped, and a URL without a query
/// still ends in `?`. Re-encoding an encoded URL returns it unchanged.
pub fn encode_url(raw: &str) -> Result<String, url::ParseError> {
    let unescaped = raw.replace("&amp;", "&");
    let parsed = Url::parse(&unescaped)?;
    if parsed.host_str().is_none() {
        return Err(url::ParseError::EmptyHost);
    }

    let authority = &parsed[Position::BeforeUsername..Position::AfterPort];
    let query = serialize_query(&parse_query(parsed.query().unwrap_or("")));

    Ok(format!(
        "{}://{}{}?{}",
        parsed.scheme(),
        authority,
        parsed.path(),
        query
    ))
}
