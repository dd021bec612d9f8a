//! ZIP export of per-page text files.

use std::io::{Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::filename::safe_name;
use super::types::PageRecord;
use crate::error_handling::ExportError;

/// Writes one deflated `.txt` entry per record, named by [`safe_name`].
///
/// Failed records produce an empty entry so indices stay aligned with the CSV.
pub fn write_zip<W: Write + Seek>(records: &[PageRecord], writer: W) -> Result<W, ExportError> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (idx, record) in records.iter().enumerate() {
        let name = safe_name(idx + 1, &record.url);
        zip.start_file(name, options)?;
        zip.write_all(record.text.as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Exports the ZIP archive to `path`.
pub fn export_zip(path: &Path, records: &[PageRecord]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_zip(records, file)?;
    log::info!("Wrote {} text files to {}", records.len(), path.display());
    Ok(())
}
