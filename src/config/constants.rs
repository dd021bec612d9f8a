//! Configuration constants.
//!
//! Defaults and limits used throughout the application.

/// Maximum number of URLs processed per batch. Extra URLs are dropped.
pub const MAX_LINKS: usize = 10;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default polite delay after each URL, in seconds
pub const DEFAULT_DELAY_SECS: f64 = 0.3;

/// Default User-Agent string for HTTP requests.
///
/// Identifies the tool honestly rather than impersonating a browser.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; PageTextGrabber/1.1)";

/// Default directory that receives all exports
pub const DEFAULT_OUTPUT_DIR: &str = "./pages_out";

/// CSV export file name
pub const CSV_FILE_NAME: &str = "pages.csv";
/// ZIP export file name
pub const ZIP_FILE_NAME: &str = "pages_txt.zip";
/// Combined text export file name
pub const COMBINED_FILE_NAME: &str = "combined_pages.txt";
/// Subdirectory of the output directory holding one `.txt` per page
pub const INDIVIDUAL_DIR_NAME: &str = "pages";

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum length of a per-item note.
/// Longer notes are truncated with an indicator.
pub const MAX_NOTE_LENGTH: usize = 500;

/// Length cap for the query-derived part of an export file name
pub const QUERY_SUFFIX_MAX_LEN: usize = 24;
