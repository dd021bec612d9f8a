//! page_text library: visible-text extraction for small batches of web pages
//!
//! This library fetches up to ten URLs, extracts the text a reader would see on each
//! rendered page, and exports the results as CSV, a ZIP of per-page text files, a
//! combined text file, and individual text files.
//!
//! The extraction core ([`extract::extract_visible_text`]) is synchronous and needs no
//! runtime. Batch processing ([`run_batch`]) requires a Tokio runtime.
//!
//! # Example
//!
//! ```no_run
//! use page_text::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     file: std::path::PathBuf::from("urls.txt"),
//!     delay_seconds: 0.5,
//!     ..Default::default()
//! };
//!
//! let report = run_batch(config).await?;
//! println!("Processed {} URLs: {} succeeded, {} failed",
//!          report.total_urls, report.successful, report.failed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
mod run;
mod utils;

// Re-export public API
pub use app::{parse_url_list, validate_and_normalize_url};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use extract::{extract_visible_text, PageText};
pub use run::{process_url, process_urls, run_batch, BatchReport};
