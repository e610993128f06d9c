//! Error types for the HTTP transport layer.

use problem_client::ProblemError;

/// Errors that can occur while extracting problem details from an HTTP
/// response.
#[derive(Debug, thiserror::Error)]
pub enum HttpProblemError {
    /// The problem document could not be read or decoded.
    #[error(transparent)]
    Problem(#[from] ProblemError),

    /// Streaming the response body failed.
    #[cfg(feature = "client")]
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
