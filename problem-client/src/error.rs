//! Error types for problem details extraction.
//!
//! Only failures that prevent a document from being read at all are errors.
//! A media type that does not announce a problem document, a document that is
//! not a JSON object, and schema members of the wrong JSON type all resolve to
//! a value instead (see [`crate::ParseOutcome`]).

use std::io;

/// Errors that can occur once a response has been recognized as carrying a
/// problem details document.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    /// The body is not a well-formed JSON value (malformed, truncated or empty).
    #[error("malformed problem document: {0}")]
    Decode(#[source] serde_json::Error),

    /// Reading the body failed. The underlying error is passed through unchanged.
    #[error("failed to read problem document body: {0}")]
    BodyRead(#[source] io::Error),

    /// The body exceeded the configured size limit.
    #[error("problem document exceeds {limit} bytes")]
    BodyTooLarge {
        /// The configured limit, in bytes.
        limit: u64,
    },
}

impl From<serde_json::Error> for ProblemError {
    /// Splits a JSON reader error into its transport and syntax halves.
    ///
    /// `serde_json` wraps reader failures in its own error type; those are
    /// unwrapped back into the original [`io::Error`].
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::BodyRead(io::Error::from(err))
        } else {
            Self::Decode(err)
        }
    }
}

impl ProblemError {
    /// Returns `true` if the document itself was malformed, as opposed to the
    /// body being unreadable.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
