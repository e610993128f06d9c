//! Problem details extraction for `reqwest` responses.
//!
//! [`ProblemResponseExt`] adds [`problem`](ProblemResponseExt::problem) to
//! [`reqwest::Response`]:
//!
//! ```no_run
//! use problem_client_http::{ParseOutcome, ProblemResponseExt};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let response = reqwest::get("https://api.example.com/orders/17").await?;
//! match response.problem().await? {
//!     ParseOutcome::Problem { problem, extensions } => {
//!         eprintln!("{problem} ({} extension members)", extensions.len());
//!     }
//!     ParseOutcome::NotApplicable(response) => {
//!         let body = response.text().await?;
//!         println!("{body}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod extract;

pub use extract::parse_problem;

use problem_client::{ParseOutcome, ProblemParser};
use reqwest::Response;

use crate::error::HttpProblemError;

/// Extension trait recognizing problem details documents in HTTP responses.
#[async_trait::async_trait]
pub trait ProblemResponseExt: Sized + Send {
    /// Classifies the response with the default [`ProblemParser`].
    ///
    /// # Errors
    ///
    /// See [`ProblemResponseExt::problem_with`].
    async fn problem(self) -> Result<ParseOutcome<Self>, HttpProblemError> {
        self.problem_with(&ProblemParser::new()).await
    }

    /// Classifies the response with a custom parser.
    ///
    /// When the response does not announce a problem document it is handed
    /// back untouched inside [`ParseOutcome::NotApplicable`]. Otherwise the
    /// body is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpProblemError::Transport`] if streaming the body fails and
    /// [`HttpProblemError::Problem`] if the document cannot be decoded.
    async fn problem_with(
        self,
        parser: &ProblemParser,
    ) -> Result<ParseOutcome<Self>, HttpProblemError>;
}

#[async_trait::async_trait]
impl ProblemResponseExt for Response {
    async fn problem_with(
        self,
        parser: &ProblemParser,
    ) -> Result<ParseOutcome<Self>, HttpProblemError> {
        parse_problem(self, parser).await
    }
}
