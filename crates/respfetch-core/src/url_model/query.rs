//! Query string parsing and re-serialization with repeated keys.

use url::form_urlencoded;

/// Parameter name to its values, in first-appearance order of the name.
pub type QueryMap = Vec<(String, Vec<String>)>;

/// Parses a raw query string (without the leading `?`).
///
/// Values are percent-decoded (`+` as space). Repeated names collect their
/// values under the first occurrence. Pairs with an empty value, or no `=`,
/// are dropped.
pub fn parse_query(query: &str) -> QueryMap {
    let mut map: QueryMap = Vec::new();
    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match map.iter_mut().find(|(existing, _)| *existing == *name) {
            Some((_, values)) => values.push(value.into_owned()),
            None => map.push((name.into_owned(), vec![value.into_owned()])),
        }
    }
    map
}

/// Serializes a query map as `name=value` pairs, one pair per value.
pub fn serialize_query(map: &QueryMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, values) in map {
        for value in values {
            serializer.append_pair(name, value);
        }
    }
    serializer.finish()
}
