//! Response descriptors the parser can read from.
//!
//! A [`ProblemSource`] is an HTTP response that has already been received:
//! a status code, a case-insensitive header lookup and a body that can be
//! consumed once.

use std::io::{self, Cursor};

use http::header::{AsHeaderName, HeaderMap, HeaderValue};

/// An already-received HTTP response.
pub trait ProblemSource {
    /// The single-consumption body reader.
    type Body: io::Read;

    /// Numeric HTTP status code of the response.
    fn status(&self) -> u16;

    /// Returns the first value of header `name`, looked up case-insensitively.
    ///
    /// Values that are not visible ASCII are reported as absent.
    fn header(&self, name: &str) -> Option<&str>;

    /// Consumes the response, yielding its body.
    fn into_body(self) -> Self::Body;
}

fn header_str<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Option<&str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

impl<B: io::Read> ProblemSource for http::Response<B> {
    type Body = B;

    fn status(&self) -> u16 {
        http::Response::status(self).as_u16()
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_str(self.headers(), name)
    }

    fn into_body(self) -> B {
        http::Response::into_body(self)
    }
}

/// A response whose body has been fully buffered in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferedResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl BufferedResponse {
    /// Creates a buffered response from its parts.
    #[must_use]
    pub const fn new(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Sets the `Content-Type` header, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`http::header::InvalidHeaderValue`] if `content_type` is not
    /// a valid header value.
    pub fn with_content_type(
        mut self,
        content_type: &str,
    ) -> Result<Self, http::header::InvalidHeaderValue> {
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_str(content_type)?,
        );
        Ok(self)
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, returning the raw body bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}

impl ProblemSource for BufferedResponse {
    type Body = Cursor<Vec<u8>>;

    fn status(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_str(&self.headers, name)
    }

    fn into_body(self) -> Self::Body {
        Cursor::new(self.body)
    }
}
