//! Visible-text extraction.
//!
//! Turns raw markup into the text a reader would see on the rendered page plus the page
//! title. The pipeline is:
//! 1. parse with `scraper` (html5ever never rejects input, malformed markup included)
//! 2. [`strip_non_rendered`] detaches script/style/noscript/template and comments
//! 3. [`visible_text_nodes`] walks the body in document order, skipping hidden parents
//! 4. [`normalize_fragments`] joins and canonicalizes whitespace
//!
//! Visibility is decided from the direct parent only; see [`is_hidden`].

mod collect;
mod normalize;
mod sanitize;
mod title;
mod visibility;

use scraper::Html;
use serde::Serialize;

pub use collect::{visible_text_nodes, VisibleTextNodes};
pub use normalize::normalize_fragments;
pub use sanitize::{strip_non_rendered, NON_RENDERED_ELEMENTS};
pub use title::extract_title;
pub use visibility::is_hidden;

/// Title and visible body text of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageText {
    /// Trimmed `<title>` text, empty when absent
    pub title: String,
    /// Normalized visible text, empty when nothing visible was found
    pub text: String,
}

/// Extracts the title and the normalized visible text from raw markup.
///
/// Never fails: unusual or broken markup degrades to empty strings.
///
/// # Example
///
/// ```
/// use page_text::extract::extract_visible_text;
///
/// let page = extract_visible_text(
///     "<title>Test</title><p>Hello&nbsp;World</p><span style=\"display:none\">Hidden</span>",
/// );
/// assert_eq!(page.title, "Test");
/// assert_eq!(page.text, "Hello World");
/// ```
pub fn extract_visible_text(html: &str) -> PageText {
    let mut document = Html::parse_document(html);
    let title = extract_title(&document);
    let removed = strip_non_rendered(&mut document);
    let text = normalize_fragments(visible_text_nodes(&document));

    log::debug!(
        "Extracted {} chars of visible text ({} non-rendered nodes removed, title present: {})",
        text.len(),
        removed,
        !title.is_empty()
    );

    PageText { title, text }
}
