use problem_client::{ParseOutcome, ProblemError, ProblemParser};
use reqwest::Response;
#[cfg(feature = "telemetry")]
use tracing::{debug, instrument, trace};

use crate::error::HttpProblemError;
use crate::headers::content_type;

/// Extracts a problem details document from a `reqwest` response.
///
/// The body is streamed only when the `Content-Type` header matches; it is
/// buffered up to the parser's body limit and then decoded. The response is
/// dropped, releasing its connection, before this returns.
///
/// # Errors
///
/// Returns [`HttpProblemError::Transport`] if streaming the body fails,
/// [`ProblemError::BodyTooLarge`] if it exceeds the parser's limit and
/// [`ProblemError::Decode`] if it is not a JSON value.
#[cfg_attr(
    feature = "telemetry",
    instrument(name = "problem.reqwest.parse", skip_all, fields(url = %response.url()), err)
)]
pub async fn parse_problem(
    mut response: Response,
    parser: &ProblemParser,
) -> Result<ParseOutcome<Response>, HttpProblemError> {
    if !parser.accepts(content_type(response.headers())) {
        #[cfg(feature = "telemetry")]
        trace!(status = ?response.status(), "No problem document announced, returning response");
        return Ok(ParseOutcome::NotApplicable(response));
    }

    let status = response.status().as_u16();
    let limit = parser.config().max_body_bytes;
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if (body.len() + chunk.len()) as u64 > limit {
            return Err(ProblemError::BodyTooLarge { limit }.into());
        }
        body.extend_from_slice(&chunk);
    }
    drop(response);

    #[cfg(feature = "telemetry")]
    debug!(status, bytes = body.len(), "Buffered problem document");

    let (problem, extensions) = parser.decode(status, body.as_slice())?;
    Ok(ParseOutcome::Problem {
        problem,
        extensions,
    })
}
