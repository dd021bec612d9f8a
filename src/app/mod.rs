//! Main application modules.
//!
//! This module provides URL list input and validation plus progress logging used by
//! the batch runner.

pub mod logging;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use url::{parse_url_list, read_url_list, validate_and_normalize_url};
