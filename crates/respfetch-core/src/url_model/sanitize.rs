//! Path-safe filename components.

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
///
/// Underscores are not collapsed; `/data` becomes `_data` and the error
/// prefix relies on the leading underscore surviving.
pub fn sanitize_component(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Returns at most the first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
