//! Export of processed pages.
//!
//! Every batch is written in four shapes under one output directory:
//! - `pages.csv`: one row per URL (`url,title,text,notes`)
//! - `pages_txt.zip`: one deflated `.txt` per URL
//! - `combined_pages.txt`: all pages with a header line each
//! - `pages/`: the same per-URL `.txt` files, uncompressed
//!
//! Per-page file names come from [`safe_name`].

mod archive;
mod csv;
mod filename;
mod text;
mod types;

use std::path::Path;

use crate::config::{COMBINED_FILE_NAME, CSV_FILE_NAME, INDIVIDUAL_DIR_NAME, ZIP_FILE_NAME};
use crate::error_handling::ExportError;

pub use self::csv::{export_csv, write_csv};
pub use archive::{export_zip, write_zip};
pub use filename::safe_name;
pub use text::{combined_text, export_combined, export_individual};
pub use types::{ExportPaths, PageRecord};

/// Writes all exports for a batch into `output_dir`, creating it if needed.
pub fn write_all(output_dir: &Path, records: &[PageRecord]) -> Result<ExportPaths, ExportError> {
    std::fs::create_dir_all(output_dir)?;

    let csv = output_dir.join(CSV_FILE_NAME);
    export_csv(&csv, records)?;

    let zip = output_dir.join(ZIP_FILE_NAME);
    export_zip(&zip, records)?;

    let combined = output_dir.join(COMBINED_FILE_NAME);
    export_combined(&combined, records)?;

    let individual = export_individual(&output_dir.join(INDIVIDUAL_DIR_NAME), records)?;

    Ok(ExportPaths {
        csv,
        zip,
        combined,
        individual,
    })
}
