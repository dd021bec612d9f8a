//! Page title derivation.

use scraper::{ElementRef, Html};

/// Returns the trimmed text of the first `<title>` element, or an empty string.
pub fn extract_title(document: &Html) -> String {
    let title = document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "title");

    match title {
        Some(element) => {
            let text = element.text().collect::<String>().trim().to_string();
            log::debug!("Extracted title text: '{}' (length: {})", text, text.len());
            text
        }
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}
