#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! RFC 9457 problem details extraction for HTTP responses.
//!
//! Given a response that has already been received, this crate decides
//! whether its body is an `application/problem+json` document and, if so,
//! splits it into the members fixed by the RFC ([`Problem`]) and everything
//! else ([`ExtensionMembers`]).
//!
//! ```
//! use problem_client::{ParseOutcome, parse};
//!
//! let response = http::Response::builder()
//!     .status(403)
//!     .header("Content-Type", "application/problem+json")
//!     .body(&br#"{"title": "Forbidden", "balance": 30}"#[..])?;
//!
//! match parse(response)? {
//!     ParseOutcome::Problem { problem, extensions } => {
//!         assert_eq!(problem.status, 403);
//!         assert_eq!(problem.title, "Forbidden");
//!         assert_eq!(extensions.get_as::<u32>("balance")?, Some(30));
//!     }
//!     ParseOutcome::NotApplicable(_response) => unreachable!(),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`config`] - Media type matching policy and body limits
//! - [`error`] - Failures while reading a problem document
//! - [`outcome`] - The classification result
//! - [`parser`] - The [`ProblemParser`] itself
//! - [`problem`] - [`Problem`] and [`ExtensionMembers`] value types
//! - [`source`] - Response descriptors the parser reads from
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod config;
pub mod error;
pub mod outcome;
pub mod parser;
pub mod problem;
pub mod source;

pub use config::{MediaTypeMatch, PROBLEM_JSON_MEDIA_TYPE, ParserConfig};
pub use error::ProblemError;
pub use outcome::ParseOutcome;
pub use parser::{ProblemParser, parse};
pub use problem::{ABOUT_BLANK, ExtensionMembers, Problem};
pub use source::{BufferedResponse, ProblemSource};
