//! Classification of a fetched response into a printable report.

use std::io::Write;

use problem_client::{ExtensionMembers, ParseOutcome, Problem, ProblemParser};
use problem_client_http::ProblemResponseExt;
use reqwest::{Response, StatusCode};

use crate::error::CliError;

/// What the requested URL answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// The response carried a problem details document.
    Problem {
        /// Schema members of the document.
        problem: Problem,
        /// Remaining members of the document.
        extensions: ExtensionMembers,
    },
    /// A successful response without problem details.
    Success {
        /// Response status.
        status: StatusCode,
    },
    /// An unsuccessful response without problem details.
    Unexpected {
        /// Response status.
        status: StatusCode,
        /// Raw response body.
        body: Vec<u8>,
    },
}

impl Report {
    /// Classifies `response`, reading its body when needed.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Problem`] if a problem document cannot be read,
    /// [`CliError::Request`] if an ordinary error body cannot be read and
    /// [`CliError::BodyTooLarge`] if that body exceeds the parser's limit.
    pub async fn from_response(
        response: Response,
        parser: &ProblemParser,
    ) -> Result<Self, CliError> {
        match response.problem_with(parser).await? {
            ParseOutcome::Problem {
                problem,
                extensions,
            } => Ok(Self::Problem {
                problem,
                extensions,
            }),
            ParseOutcome::NotApplicable(response) => {
                let status = response.status();
                if status.is_success() {
                    return Ok(Self::Success { status });
                }
                let body = read_body(response, parser.config().max_body_bytes).await?;
                Ok(Self::Unexpected { status, body })
            }
        }
    }

    /// Writes the report in human-readable form.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] if writing fails.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<(), CliError> {
        match self {
            Self::Problem {
                problem,
                extensions,
            } => {
                writeln!(
                    out,
                    "Problem details: {}",
                    serde_json::to_string_pretty(problem)?
                )?;
                writeln!(
                    out,
                    "Extension members: {}",
                    serde_json::to_string_pretty(extensions)?
                )?;
            }
            Self::Success { status } => {
                writeln!(out, "Request succeeded with status {status}, no problem details")?;
            }
            Self::Unexpected { status, body } => {
                writeln!(
                    out,
                    "API returned {status} but no problem details, got following response:"
                )?;
                out.write_all(body)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Buffers the body of `response`, failing once it grows past `limit` bytes.
async fn read_body(mut response: Response, limit: u64) -> Result<Vec<u8>, CliError> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if (body.len() + chunk.len()) as u64 > limit {
            return Err(CliError::BodyTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
