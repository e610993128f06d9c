//! Command-line client reporting RFC 9457 problem details.
//!
//! Fetches a URL and prints either the problem details document it returned,
//! a success notice, or the raw body of an unsuccessful response.
//!
//! # Modules
//!
//! - [`config`] - Arguments and environment variables
//! - [`error`] - Errors that abort a request
//! - [`report`] - Response classification and rendering

pub mod config;
pub mod error;
pub mod report;

use std::io::Write;

pub use config::CliConfig;
pub use error::CliError;
pub use report::Report;

/// Requests `config.url`, classifies the response and writes the report to
/// `out`.
///
/// # Errors
///
/// Returns [`CliError`] if the request fails, a problem document cannot be
/// read, or the report cannot be written.
pub async fn run<W: Write>(config: &CliConfig, out: W) -> Result<Report, CliError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .build()?;

    tracing::info!(url = %config.url, "Sending request");
    let response = client.get(config.url.clone()).send().await?;
    tracing::debug!(status = %response.status(), "Received response");

    let report = Report::from_response(response, &config.parser()).await?;
    report.write_to(out)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use problem_client::Problem;
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config(server: &MockServer, route: &str) -> CliConfig {
        CliConfig {
            url: format!("{}{route}", server.uri()).parse().unwrap(),
            timeout_secs: 5,
            lenient_media_type: false,
            max_body_bytes: 1024,
        }
    }

    #[tokio::test]
    async fn test_run_reports_problem() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(ResponseTemplate::new(403).set_body_raw(
                r#"{"status": 400, "title": "You do not have enough credit.", "balance": 30}"#,
                "application/problem+json",
            ))
            .mount(&mock_server)
            .await;

        let mut out = Vec::<u8>::new();
        let report = run(&config(&mock_server, "/account"), &mut out).await.unwrap();

        match report {
            Report::Problem {
                problem,
                extensions,
            } => {
                assert_eq!(
                    problem,
                    Problem {
                        status: 403,
                        title: "You do not have enough credit.".to_owned(),
                        ..Problem::default()
                    }
                );
                assert_eq!(extensions.get_as::<u32>("balance").unwrap(), Some(30));
            }
            other => panic!("expected problem report, got {other:?}"),
        }
        assert!(!out.is_empty());
    }

    #[tokio::test]
    async fn test_run_reports_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "arbitrary_json_values": 2024 })),
            )
            .mount(&mock_server)
            .await;

        let report = run(&config(&mock_server, "/health"), std::io::sink()).await.unwrap();

        assert_eq!(
            report,
            Report::Success {
                status: StatusCode::OK
            }
        );
    }

    #[tokio::test]
    async fn test_run_reports_unexpected_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gateway"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let report = run(&config(&mock_server, "/gateway"), std::io::sink()).await.unwrap();

        assert_eq!(
            report,
            Report::Unexpected {
                status: StatusCode::BAD_GATEWAY,
                body: b"upstream down".to_vec(),
            }
        );
    }

    #[tokio::test]
    async fn test_run_rejects_oversized_unexpected_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gateway"))
            .respond_with(ResponseTemplate::new(502).set_body_string("x".repeat(4096)))
            .mount(&mock_server)
            .await;

        let err = run(&config(&mock_server, "/gateway"), std::io::sink())
            .await
            .unwrap_err();

        assert!(
            matches!(err, CliError::BodyTooLarge { limit: 1024 }),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_run_fails_on_malformed_problem() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(
                ResponseTemplate::new(500).set_body_raw("{", "application/problem+json"),
            )
            .mount(&mock_server)
            .await;

        let err = run(&config(&mock_server, "/broken"), std::io::sink())
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Problem(_)), "got {err:?}");
    }
}
