//! Utilities for sanitizing per-item notes.
//!
//! Removes control characters from error text before it lands in exports, and
//! truncates long messages so one failure cannot bloat the CSV.

use crate::config::MAX_NOTE_LENGTH;

/// Sanitizes a message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) are dropped;
/// printable ASCII and all non-ASCII characters are kept.
pub fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes and truncates a note to `MAX_NOTE_LENGTH` characters.
///
/// Truncated notes end with an indicator carrying the original length.
pub fn sanitize_and_truncate_note(message: &str) -> String {
    let sanitized = sanitize_message(message);
    let char_count = sanitized.chars().count();

    if char_count > MAX_NOTE_LENGTH {
        let keep = MAX_NOTE_LENGTH.saturating_sub(50);
        let truncated: String = sanitized.chars().take(keep).collect();
        format!("{truncated}... (truncated, original length: {char_count} chars)")
    } else {
        sanitized
    }
}
