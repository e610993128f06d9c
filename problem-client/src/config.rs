//! Parser configuration.

/// Media type announcing an RFC 9457 problem details document in JSON.
pub const PROBLEM_JSON_MEDIA_TYPE: &str = "application/problem+json";

/// Default cap on the number of body bytes read, 1 MiB.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

/// How the `Content-Type` header is compared with [`PROBLEM_JSON_MEDIA_TYPE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MediaTypeMatch {
    /// The header value must equal `application/problem+json` byte for byte.
    #[default]
    Exact,
    /// Only the media-type essence is compared, ASCII case-insensitively, so
    /// parameters such as `charset=utf-8` are tolerated.
    Essence,
}

impl MediaTypeMatch {
    /// Returns `true` if `content_type` announces a problem details document.
    #[must_use]
    pub fn matches(self, content_type: &str) -> bool {
        match self {
            Self::Exact => content_type == PROBLEM_JSON_MEDIA_TYPE,
            Self::Essence => {
                let essence = content_type.split_once(';').map_or(content_type, |(e, _)| e);
                essence.trim().eq_ignore_ascii_case(PROBLEM_JSON_MEDIA_TYPE)
            }
        }
    }
}

/// Settings for a [`crate::ProblemParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserConfig {
    /// Media type comparison policy (default: [`MediaTypeMatch::Exact`]).
    pub media_type: MediaTypeMatch,
    /// Maximum number of body bytes read before giving up
    /// (default: [`DEFAULT_MAX_BODY_BYTES`]).
    pub max_body_bytes: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            media_type: MediaTypeMatch::Exact,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ParserConfig {
    /// Sets the media type comparison policy.
    #[must_use]
    pub const fn with_media_type(mut self, media_type: MediaTypeMatch) -> Self {
        self.media_type = media_type;
        self
    }

    /// Sets the maximum number of body bytes read.
    #[must_use]
    pub const fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_strict() {
        let policy = MediaTypeMatch::Exact;
        assert!(policy.matches("application/problem+json"));
        assert!(!policy.matches("application/problem+json; charset=utf-8"));
        assert!(!policy.matches("Application/Problem+JSON"));
        assert!(!policy.matches(" application/problem+json"));
        assert!(!policy.matches("application/json"));
    }

    #[test]
    fn test_essence_match_ignores_parameters_and_case() {
        let policy = MediaTypeMatch::Essence;
        assert!(policy.matches("application/problem+json"));
        assert!(policy.matches("application/problem+json; charset=utf-8"));
        assert!(policy.matches("Application/Problem+JSON"));
        assert!(policy.matches(" application/problem+json ;q=1"));
        assert!(!policy.matches("application/json"));
        assert!(!policy.matches("application/problem+xml"));
        assert!(!policy.matches(""));
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::default()
            .with_media_type(MediaTypeMatch::Essence)
            .with_max_body_bytes(16);
        assert_eq!(config.media_type, MediaTypeMatch::Essence);
        assert_eq!(config.max_body_bytes, 16);
    }
}
