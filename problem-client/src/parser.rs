//! Classification of responses and mapping of problem documents.
//!
//! [`ProblemParser::parse`] runs the whole pipeline:
//!
//! 1. The `Content-Type` header is compared with `application/problem+json`.
//!    On mismatch the response is handed back untouched.
//! 2. The body is taken over and read as a single JSON value. It is dropped
//!    exactly once when the call returns, whatever the outcome.
//! 3. A value that is not a JSON object yields a problem carrying only the
//!    response status (RFC 9457 §3.1).
//! 4. Each member of an object is dispatched: `status` is dropped in favour of
//!    the response status, `type`/`title`/`detail`/`instance` are taken when
//!    they are strings and ignored otherwise, anything else becomes an
//!    extension member.

use std::io::{self, BufReader, Read};

use serde::Deserialize;
use serde_json::Value;
#[cfg(feature = "telemetry")]
use tracing::{debug, instrument, trace, warn};

use crate::config::{MediaTypeMatch, ParserConfig};
use crate::error::ProblemError;
use crate::outcome::ParseOutcome;
use crate::problem::{ExtensionMembers, Problem};
use crate::source::ProblemSource;

/// Extracts RFC 9457 problem details from HTTP responses.
///
/// The parser holds only its configuration and can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProblemParser {
    config: ParserConfig,
}

impl ProblemParser {
    /// Creates a parser with the default configuration: exact media type
    /// matching and a 1 MiB body limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns `true` if `content_type` announces a problem details document
    /// under this parser's matching policy. An absent header never does.
    #[must_use]
    pub fn accepts(&self, content_type: Option<&str>) -> bool {
        content_type.is_some_and(|value| self.config.media_type.matches(value))
    }

    /// Classifies `response` and extracts its problem details document.
    ///
    /// Returns [`ParseOutcome::NotApplicable`] holding the untouched response
    /// when its `Content-Type` does not announce a problem document. Otherwise
    /// the response body is consumed and released before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::Decode`] if the body is not a JSON value,
    /// [`ProblemError::BodyRead`] if reading the body fails, and
    /// [`ProblemError::BodyTooLarge`] if the body exceeds the configured limit.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "problem.parse", skip_all, fields(status = response.status()))
    )]
    pub fn parse<R: ProblemSource>(&self, response: R) -> Result<ParseOutcome<R>, ProblemError> {
        if !self.accepts(response.header(http::header::CONTENT_TYPE.as_str())) {
            #[cfg(feature = "telemetry")]
            trace!(
                content_type = response.header(http::header::CONTENT_TYPE.as_str()),
                "No problem document announced"
            );
            return Ok(ParseOutcome::NotApplicable(response));
        }

        let status = response.status();
        let (problem, extensions) = self.decode(status, response.into_body())?;
        Ok(ParseOutcome::Problem {
            problem,
            extensions,
        })
    }

    /// Reads a problem document from `body` and maps it onto the schema.
    ///
    /// The body is consumed and dropped before this returns, on success and
    /// on failure alike. Bytes following the first complete JSON value are
    /// not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::Decode`] if the body is not a JSON value,
    /// [`ProblemError::BodyRead`] if reading fails, and
    /// [`ProblemError::BodyTooLarge`] if the body exceeds the configured limit.
    pub fn decode<B: Read>(
        &self,
        status: u16,
        body: B,
    ) -> Result<(Problem, ExtensionMembers), ProblemError> {
        let document = match self.read_document(body) {
            Ok(document) => document,
            Err(err) => {
                #[cfg(feature = "telemetry")]
                warn!(status, error = %err, "Failed to read problem document");
                return Err(err);
            }
        };
        let (problem, extensions) = Self::map_document(status, document);

        #[cfg(feature = "telemetry")]
        debug!(
            status,
            problem_type = problem.effective_type(),
            extensions = extensions.len(),
            "Parsed problem document"
        );

        Ok((problem, extensions))
    }

    fn read_document<B: Read>(&self, body: B) -> Result<Value, ProblemError> {
        let limit = self.config.max_body_bytes;
        let mut body = LimitedBody::new(body, limit);
        let document = {
            let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(&mut body));
            Value::deserialize(&mut deserializer)
        };

        match document {
            Ok(document) => Ok(document),
            Err(_) if body.exceeded => Err(ProblemError::BodyTooLarge { limit }),
            Err(err) => Err(err.into()),
        }
    }

    /// Maps an already decoded document onto [`Problem`] and
    /// [`ExtensionMembers`].
    ///
    /// `status` always ends up in [`Problem::status`]. A document that is not
    /// a JSON object yields an otherwise empty problem.
    #[must_use]
    pub fn map_document(status: u16, document: Value) -> (Problem, ExtensionMembers) {
        let mut problem = Problem::with_status(status);
        let mut extensions = ExtensionMembers::new();

        let Value::Object(members) = document else {
            return (problem, extensions);
        };

        for (key, value) in members {
            let field = match key.as_str() {
                "status" => continue,
                "type" => &mut problem.r#type,
                "title" => &mut problem.title,
                "detail" => &mut problem.detail,
                "instance" => &mut problem.instance,
                _ => {
                    extensions.insert(key, value);
                    continue;
                }
            };
            // Members of the wrong type are ignored (RFC 9457 §3.1).
            if let Value::String(text) = value {
                *field = text;
            }
        }

        (problem, extensions)
    }
}

/// Reader that refuses to hand out more than `remaining` bytes of a body.
///
/// Reading past the limit fails and sets `exceeded`. A body that ends exactly
/// at the limit reads as a clean end of stream.
#[derive(Debug)]
struct LimitedBody<B> {
    inner: B,
    remaining: u64,
    exceeded: bool,
}

impl<B: Read> LimitedBody<B> {
    const fn new(inner: B, limit: u64) -> Self {
        Self {
            inner,
            remaining: limit,
            exceeded: false,
        }
    }
}

impl<B: Read> Read for LimitedBody<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.remaining == 0 {
            let mut next = [0_u8; 1];
            if self.inner.read(&mut next)? == 0 {
                return Ok(0);
            }
            self.exceeded = true;
            return Err(io::Error::other("problem document exceeds the body limit"));
        }

        let max = usize::try_from(self.remaining).map_or(buf.len(), |rem| rem.min(buf.len()));
        let n = self.inner.read(&mut buf[..max])?;
        self.remaining -= n as u64;
        Ok(n)
    }
}

impl From<ParserConfig> for ProblemParser {
    fn from(config: ParserConfig) -> Self {
        Self::with_config(config)
    }
}

impl From<MediaTypeMatch> for ProblemParser {
    fn from(media_type: MediaTypeMatch) -> Self {
        Self::with_config(ParserConfig::default().with_media_type(media_type))
    }
}

/// Classifies `response` with the default [`ProblemParser`].
///
/// # Errors
///
/// See [`ProblemParser::parse`].
pub fn parse<R: ProblemSource>(response: R) -> Result<ParseOutcome<R>, ProblemError> {
    ProblemParser::new().parse(response)
}
