//! HTTP client initialization.

use crate::fetch::FetchConfig;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the fetch configuration
/// - Timeout from the fetch configuration
/// - Redirect following (reqwest default policy, up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &FetchConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()
}
