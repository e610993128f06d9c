//! Command-line configuration.
//!
//! Every option can also be supplied through the environment. A `.env` file
//! in the working directory is loaded before arguments are parsed.
//!
//! # Environment Variables
//!
//! - `PROBLEM_URL` - URL to request
//! - `PROBLEM_TIMEOUT_SECS` - Request timeout in seconds (default: `30`)
//! - `PROBLEM_LENIENT_MEDIA_TYPE` - Accept media type parameters and any case
//! - `PROBLEM_MAX_BODY_BYTES` - Largest problem document read (default: 1 MiB)
//! - `RUST_LOG` - Log level filter (default: `info`)

use std::time::Duration;

use clap::Parser;
use problem_client::config::DEFAULT_MAX_BODY_BYTES;
use problem_client::{MediaTypeMatch, ParserConfig, ProblemParser};
use url::Url;

/// Fetch a URL and report any RFC 9457 problem details it returns.
#[derive(Debug, Clone, Parser)]
#[command(name = "problem-client", version, about, long_about = None)]
pub struct CliConfig {
    /// URL to request with GET.
    #[arg(value_name = "URL", env = "PROBLEM_URL")]
    pub url: Url,

    /// Request timeout in seconds.
    #[arg(long, env = "PROBLEM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Accept `application/problem+json` with parameters (e.g. `charset`) and
    /// in any letter case.
    #[arg(long, env = "PROBLEM_LENIENT_MEDIA_TYPE")]
    pub lenient_media_type: bool,

    /// Largest problem document read, in bytes.
    #[arg(long, env = "PROBLEM_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: u64,
}

impl CliConfig {
    /// Loads `.env` if present, then parses arguments and environment.
    ///
    /// Exits the process with a usage message on invalid arguments.
    #[must_use]
    pub fn load() -> Self {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    /// Request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the problem parser described by this configuration.
    #[must_use]
    pub const fn parser(&self) -> ProblemParser {
        let media_type = if self.lenient_media_type {
            MediaTypeMatch::Essence
        } else {
            MediaTypeMatch::Exact
        };
        ProblemParser::with_config(ParserConfig {
            media_type,
            max_body_bytes: self.max_body_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["problem-client", "https://example.com/"]).unwrap();
        assert_eq!(config.url.as_str(), "https://example.com/");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.parser(), ProblemParser::new());
    }

    #[test]
    fn test_lenient_media_type() {
        let config = CliConfig::try_parse_from([
            "problem-client",
            "--lenient-media-type",
            "--max-body-bytes",
            "2048",
            "https://example.com/",
        ])
        .unwrap();
        let parser = config.parser();
        assert_eq!(parser.config().media_type, MediaTypeMatch::Essence);
        assert_eq!(parser.config().max_body_bytes, 2048);
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(CliConfig::try_parse_from(["problem-client", "not a url"]).is_err());
    }
}
