//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, input, fetch and export failures
//! - Conversion of fetch failures into the per-item note shown to users
//!
//! Fetch failures are never propagated past the batch runner: they become a note on
//! the affected item and processing continues with the next URL.

mod types;

// Re-export public API
pub use types::{ExportError, FetchError, InitializationError, InputError};

use crate::utils::sanitize::sanitize_and_truncate_note;

/// Renders a fetch failure as the user-facing note for its item.
pub fn error_note(error: &FetchError) -> String {
    sanitize_and_truncate_note(&format!("Error: {error}"))
}
