//! Error types for the command-line client.

use problem_client_http::HttpProblemError;

/// Errors that abort a request.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Building the client, sending the request or reading the body failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response announced a problem document that could not be read.
    #[error("{0}")]
    Problem(#[from] HttpProblemError),

    /// An unsuccessful response carried a body larger than the configured
    /// limit.
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge {
        /// Configured body limit in bytes.
        limit: u64,
    },

    /// Rendering the report failed.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
