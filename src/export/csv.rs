//! CSV export.
//!
//! One row per URL with columns `url,title,text,notes`.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use super::types::PageRecord;
use crate::error_handling::ExportError;

/// Writes records as CSV, header row first.
pub fn write_csv<W: Write>(records: &[PageRecord], writer: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(writer);
    if records.is_empty() {
        writer.write_record(["url", "title", "text", "notes"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Exports records to a CSV file.
///
/// # Returns
///
/// The number of records written.
pub fn export_csv(path: &Path, records: &[PageRecord]) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    log::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(records.len())
}
