//! Classify fetch failures into retry policy error kinds.

use crate::fetch::FetchError;
use crate::retry::policy::ErrorKind;

/// Transport failures and bad statuses are request-level and retryable;
/// malformed URLs and non-JSON bodies are not.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Transport(_) => ErrorKind::Transport,
        FetchError::Http { status, .. } => ErrorKind::BadStatus(*status),
        FetchError::InvalidUrl { .. } | FetchError::Json(_) => ErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_is_bad_status() {
        let e = FetchError::Http {
            status: 404,
            url: "http://h/p?".to_string(),
            body: String::new(),
        };
        assert_eq!(classify(&e), ErrorKind::BadStatus(404));
    }

    #[test]
    fn transport_is_retryable_kind() {
        let e = FetchError::Transport(curl::Error::new(7));
        assert_eq!(classify(&e), ErrorKind::Transport);
    }

    #[test]
    fn json_and_url_are_other() {
        let json = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        assert_eq!(classify(&FetchError::Json(json)), ErrorKind::Other);
        let e = FetchError::InvalidUrl {
            url: "nope".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert_eq!(classify(&e), ErrorKind::Other);
    }
}
