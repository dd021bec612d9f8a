//! Page fetching.
//!
//! Thin wrapper over `reqwest`: GET with a fixed User-Agent and timeout, redirects
//! followed, non-success statuses turned into errors. The body is decoded using the
//! charset the server declares; no further encoding detection is attempted.

use std::time::Duration;

use log::debug;

use crate::app::validate_and_normalize_url;
use crate::config::{Config, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_client;

/// Immutable request settings shared by every fetch in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl From<&Config> for FetchConfig {
    fn from(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Fetches raw markup for a URL.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a fetcher with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
        })
    }

    /// Fetches the markup at `url`.
    ///
    /// A missing scheme defaults to `https://`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for an invalid URL, a transport failure or timeout, a
    /// non-success status, or a body that cannot be decoded.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let url = validate_and_normalize_url(url)?;
        debug!("Fetching {url}");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let final_url = response.url().to_string();
        if final_url != url {
            debug!("{url} redirected to {final_url}");
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {final_url}", body.len());
        Ok(body)
    }
}
