//! Command-line client reporting RFC 9457 problem details.
//!
//! # Usage
//!
//! ```bash
//! # Fetch a URL and print any problem details it returns
//! cargo run -p problem-client-cli -- https://api.example.com/orders/17
//!
//! # Accept `application/problem+json; charset=utf-8` too
//! cargo run -p problem-client-cli -- --lenient-media-type https://api.example.com/
//!
//! # Configure logging level
//! RUST_LOG=debug cargo run -p problem-client-cli -- https://api.example.com/
//! ```

use std::process::ExitCode;

use problem_client_cli::{CliConfig, run};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing with RUST_LOG env filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load();

    match run(&config, std::io::stdout().lock()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
