//! Export record and output path types.

use std::path::PathBuf;

use serde::Serialize;

use crate::extract::PageText;

/// One processed URL, as exported.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// URL as given in the input
    pub url: String,
    /// Page title, empty when missing or on failure
    pub title: String,
    /// Visible text, empty on failure
    pub text: String,
    /// Error note, empty on success
    pub notes: String,
}

impl PageRecord {
    /// Record for a successfully extracted page.
    pub fn success(url: impl Into<String>, page: PageText) -> Self {
        Self {
            url: url.into(),
            title: page.title,
            text: page.text,
            notes: String::new(),
        }
    }

    /// Record for a URL that could not be fetched.
    pub fn failure(url: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            notes: notes.into(),
            ..Default::default()
        }
    }

    /// Whether the page was fetched and extracted.
    pub fn is_success(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Files produced by [`write_all`](super::write_all).
#[derive(Debug, Clone)]
pub struct ExportPaths {
    /// `pages.csv`
    pub csv: PathBuf,
    /// `pages_txt.zip`
    pub zip: PathBuf,
    /// `combined_pages.txt`
    pub combined: PathBuf,
    /// One `.txt` per record, in input order
    pub individual: Vec<PathBuf>,
}
