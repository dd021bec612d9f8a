//! File names for per-page text exports.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::QUERY_SUFFIX_MAX_LEN;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9]+").expect("Failed to compile non-alphanumeric pattern - this is a bug")
});

/// Raw components of a URL string, split without any normalization.
#[derive(Debug, Default, PartialEq, Eq)]
struct RawParts<'a> {
    netloc: &'a str,
    path: &'a str,
    query: &'a str,
}

/// Splits `url` into network location, path and query.
///
/// Nothing is decoded, lowercased or resolved. A scheme is only recognized when the
/// prefix before the first `:` is a valid scheme name; the network location only
/// exists after `//`. The fragment is discarded.
fn split_raw(url: &str) -> RawParts<'_> {
    let mut rest = url;
    if let Some((scheme, after)) = rest.split_once(':') {
        if is_scheme(scheme) {
            rest = after;
        }
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
    }

    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    RawParts {
        netloc,
        path,
        query,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Derives the `.txt` file name for the `idx`-th (1-based) record.
///
/// Format: `{idx:02}_{host}_{tail}.txt`, built from the URL exactly as given:
/// - `host`: the network location with `:` replaced by `_`, or `site` when there is none
///   (a scheme-less string has no network location)
/// - `tail`: the path with surrounding slashes removed and inner slashes replaced by
///   `_`, or `index` when empty
/// - a non-empty query appends `_` plus the query with non-alphanumeric runs replaced
///   by `_`, cut to 24 characters and stripped of `_` at both ends
pub fn safe_name(idx: usize, url: &str) -> String {
    let parts = split_raw(url.trim());

    let host = if parts.netloc.is_empty() {
        "site".to_string()
    } else {
        parts.netloc.replace(':', "_")
    };

    let trimmed_path = parts.path.trim_matches('/');
    let mut tail = if trimmed_path.is_empty() {
        "index".to_string()
    } else {
        trimmed_path.replace('/', "_")
    };

    let query = parts.query.trim();
    if !query.is_empty() {
        let replaced = NON_ALPHANUMERIC_RUN.replace_all(query, "_");
        let cut: String = replaced.chars().take(QUERY_SUFFIX_MAX_LEN).collect();
        tail = format!("{}_{}", tail, cut.trim_matches('_'));
    }

    format!("{idx:02}_{host}_{tail}.txt")
}
