//! Whitespace canonicalization of collected text fragments.

use regex::Regex;
use std::sync::LazyLock;

const HORIZONTAL_WHITESPACE_PATTERN: &str = r"[ \t]+";
const BLANK_LINES_PATTERN: &str = r"\n{3,}";

static HORIZONTAL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HORIZONTAL_WHITESPACE_PATTERN)
        .expect("Failed to compile horizontal whitespace pattern - this is a bug")
});

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(BLANK_LINES_PATTERN).expect("Failed to compile blank line pattern - this is a bug")
});

/// Joins raw text fragments into one readable block of text.
///
/// Each fragment is trimmed and dropped if empty; survivors are joined with `\n`.
/// Non-breaking spaces become plain spaces, runs of spaces and tabs collapse to one
/// space, and three or more newlines collapse to a single blank line. The result is
/// trimmed.
pub fn normalize_fragments<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .replace('\u{a0}', " ");

    let collapsed = HORIZONTAL_WHITESPACE.replace_all(&joined, " ");
    let collapsed = BLANK_LINES.replace_all(&collapsed, "\n\n");
    collapsed.trim().to_string()
}
