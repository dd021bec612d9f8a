//! Per-URL processing.

use log::{info, warn};

use crate::error_handling::error_note;
use crate::export::PageRecord;
use crate::extract::extract_visible_text;
use crate::fetch::Fetcher;

/// Fetches one URL and extracts its visible text.
///
/// Never fails: a fetch error becomes a record with empty title/text and a note.
pub async fn process_url(fetcher: &Fetcher, url: &str) -> PageRecord {
    match fetcher.fetch_html(url).await {
        Ok(html) => {
            let page = extract_visible_text(&html);
            info!(
                "{url}: title '{}', {} chars of text",
                page.title,
                page.text.len()
            );
            PageRecord::success(url, page)
        }
        Err(e) => {
            warn!("Failed to fetch {url}: {e}");
            PageRecord::failure(url, error_note(&e))
        }
    }
}
