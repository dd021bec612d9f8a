//! Plain-text exports: one combined file and one file per page.

use std::path::{Path, PathBuf};

use super::filename::safe_name;
use super::types::PageRecord;
use crate::error_handling::ExportError;

const NO_TITLE: &str = "(no title)";

/// Concatenates all records, each preceded by `===== [idx] title :: url =====`.
///
/// Records are separated by a blank line and the result is trimmed.
pub fn combined_text(records: &[PageRecord]) -> String {
    let mut combined = String::new();
    for (idx, record) in records.iter().enumerate() {
        let title = if record.title.is_empty() {
            NO_TITLE
        } else {
            record.title.as_str()
        };
        combined.push_str(&format!(
            "===== [{}] {} :: {} =====\n",
            idx + 1,
            title,
            record.url
        ));
        combined.push_str(&record.text);
        combined.push_str("\n\n");
    }
    combined.trim().to_string()
}

/// Writes the combined text file.
pub fn export_combined(path: &Path, records: &[PageRecord]) -> Result<(), ExportError> {
    std::fs::write(path, combined_text(records))?;
    log::info!("Wrote combined text to {}", path.display());
    Ok(())
}

/// Writes one `.txt` per record into `dir`, creating it if needed.
///
/// # Returns
///
/// The paths written, in record order.
pub fn export_individual(dir: &Path, records: &[PageRecord]) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let path = dir.join(safe_name(idx + 1, &record.url));
        std::fs::write(&path, &record.text)?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
