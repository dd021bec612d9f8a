//! Shallow, attribute-only visibility check.
//!
//! Only the element's own attributes are consulted. Callers apply this to the direct
//! parent of a text node and never walk further up, so text nested below a hidden
//! grandparent is still reported visible. That approximation is kept on purpose:
//! downstream consumers rely on the current output.

use scraper::node::Element;

/// Returns `true` when the element is explicitly hidden.
///
/// First match wins, values compared case-insensitively:
/// - `style` containing `display:none` or `visibility:hidden`
/// - `aria-hidden="true"`
/// - a `hidden` attribute with any value
///
/// Missing attributes count as empty.
pub fn is_hidden(element: &Element) -> bool {
    let style = element.attr("style").unwrap_or_default().to_lowercase();
    if style.contains("display:none") || style.contains("visibility:hidden") {
        return true;
    }

    let aria_hidden = element.attr("aria-hidden").unwrap_or_default();
    if aria_hidden.eq_ignore_ascii_case("true") {
        return true;
    }

    element.attr("hidden").is_some()
}
