//! HTTP client initialization.

use std::time::Duration;

use crate::config::ReaderConfig;
use reqwest::ClientBuilder;

/// Builds the HTTP client used to fetch documents.
///
/// The client follows redirects (reqwest's default policy of up to 10 hops),
/// applies the configured timeout to the whole request and sends the
/// configured User-Agent.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ReaderConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
