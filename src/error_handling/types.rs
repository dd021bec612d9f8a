//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors reading the URL list.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file or stdin could not be read.
    #[error("Failed to read URL list: {0}")]
    Read(#[from] std::io::Error),

    /// No usable line was found in the input.
    #[error("Please provide at least one valid URL")]
    NoUrls,
}

/// Why a single page could not be fetched.
///
/// Rendered into the per-item note; never aborts the batch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL is syntactically invalid, too long, or not http(s).
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given
        url: String,
        /// What was wrong with it
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for url: {url}")]
    Status {
        /// Response status
        status: reqwest::StatusCode,
        /// Final URL after redirects
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] ReqwestError),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] ReqwestError),

    /// Any other transport or body decoding failure.
    #[error("request failed: {0}")]
    Request(#[source] ReqwestError),
}

impl From<ReqwestError> for FetchError {
    fn from(error: ReqwestError) -> Self {
        if let Some(status) = error.status() {
            let url = error
                .url()
                .map(|u| u.to_string())
                .unwrap_or_default();
            return FetchError::Status { status, url };
        }
        if error.is_timeout() {
            FetchError::Timeout(error)
        } else if error.is_connect() {
            FetchError::Connect(error)
        } else {
            FetchError::Request(error)
        }
    }
}

/// Errors writing export files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
