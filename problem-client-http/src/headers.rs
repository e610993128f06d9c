//! Header lookups used to classify responses.

use http::HeaderMap;
use http::header::CONTENT_TYPE;

/// Returns the first `Content-Type` value of `headers`.
///
/// A value that is not visible ASCII is treated as absent, which never
/// announces a problem document.
#[must_use]
pub fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_content_type_lookup() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_type(&headers), None);

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        assert_eq!(content_type(&headers), Some("application/problem+json"));
    }

    #[test]
    fn test_opaque_content_type_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_bytes("application/problem+json\u{e9}".as_bytes()).unwrap(),
        );
        assert_eq!(content_type(&headers), None);
    }
}
