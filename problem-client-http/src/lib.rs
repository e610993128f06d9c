#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport layer for RFC 9457 problem details.
//!
//! Bridges [`problem_client`] to asynchronous HTTP clients. The core parser
//! works on blocking readers; this crate gates on the response headers,
//! streams the body of a matching `reqwest` response and hands the bytes to
//! the parser.
//!
//! # Modules
//!
//! - [`headers`] - `Content-Type` lookup on header maps
//! - [`error`] - HTTP transport error types
//! - [`client`] - `reqwest` response extension (feature: `client`)
//!
//! # Feature Flags
//!
//! - `client` - `reqwest` integration
//! - `telemetry` - Enables tracing instrumentation

pub mod error;
pub mod headers;

#[cfg(feature = "client")]
pub mod client;

pub use error::HttpProblemError;
pub use problem_client::{
    ExtensionMembers, PROBLEM_JSON_MEDIA_TYPE, ParseOutcome, Problem, ProblemParser,
};

#[cfg(feature = "client")]
pub use client::{ProblemResponseExt, parse_problem};
