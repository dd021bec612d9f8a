//! URL list input, validation and normalization.

use std::collections::HashSet;
use std::path::Path;

use log::warn;
use tokio::io::AsyncReadExt;

use crate::config::{MAX_LINKS, MAX_URL_LENGTH};
use crate::error_handling::{FetchError, InputError};

/// Splits raw input into the list of URLs to process.
///
/// Lines are trimmed and blank lines are skipped; every other line is kept as-is, so a
/// malformed entry still reaches validation and shows up as a failed item. Duplicates
/// are removed keeping the first occurrence, and the list is capped at `MAX_LINKS`.
pub fn parse_url_list(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect();

    if urls.len() > MAX_LINKS {
        warn!(
            "Received {} URLs; only the first {} are processed",
            urls.len(),
            MAX_LINKS
        );
        urls.truncate(MAX_LINKS);
    }
    urls
}

/// Reads the URL list from a file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `InputError::Read` if the source cannot be read, and
/// `InputError::NoUrls` if it yields no URLs.
pub async fn read_url_list(path: &Path) -> Result<Vec<String>, InputError> {
    let content = if path.as_os_str() == "-" {
        log::info!("Reading URLs from stdin");
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(path).await?
    };

    let urls = parse_url_list(&content);
    if urls.is_empty() {
        return Err(InputError::NoUrls);
    }
    log::info!("Total URLs to process: {}", urls.len());
    Ok(urls)
}

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix when no scheme is given, then checks that the URL parses
/// and uses http or https. URLs longer than `MAX_URL_LENGTH` are rejected.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` describing the problem.
pub fn validate_and_normalize_url(url: &str) -> Result<String, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    if url.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "exceeds maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        )));
    }

    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "exceeds maximum length after normalization ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Ok(normalized),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        },
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com");
        assert_eq!(result.ok(), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_scheme() {
        assert_eq!(
            validate_and_normalize_url("https://example.com").ok(),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("http://example.com").ok(),
            Some("http://example.com".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        assert_eq!(
            validate_and_normalize_url("example.com:8080/path?query=value").ok(),
            Some("https://example.com:8080/path?query=value".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        let result = validate_and_normalize_url("not a valid url!!!");
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        let result = validate_and_normalize_url("ftp://example.com");
        match result {
            Err(FetchError::InvalidUrl { reason, .. }) => {
                assert!(reason.contains("ftp"), "{reason}")
            }
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(validate_and_normalize_url(&long).is_err());
    }

    #[test]
    fn test_parse_url_list_trims_and_skips_blank() {
        let input = "  https://a.example  \n\n\thttps://b.example\n   \n";
        assert_eq!(
            parse_url_list(input),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_parse_url_list_keeps_hash_lines() {
        let input = "https://a.example\n# not a comment\n";
        let urls = parse_url_list(input);
        assert_eq!(urls, vec!["https://a.example", "# not a comment"]);
        assert!(matches!(
            validate_and_normalize_url(&urls[1]),
            Err(FetchError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_url_list_dedupes_in_order() {
        let input = "https://b.example\nhttps://a.example\nhttps://b.example\n https://a.example";
        assert_eq!(
            parse_url_list(input),
            vec!["https://b.example", "https://a.example"]
        );
    }

    #[test]
    fn test_parse_url_list_caps_at_max_links() {
        let input: String = (0..15)
            .map(|i| format!("https://example.com/{i}\n"))
            .collect();
        let urls = parse_url_list(&input);
        assert_eq!(urls.len(), MAX_LINKS);
        assert_eq!(urls[0], "https://example.com/0");
        assert_eq!(urls[MAX_LINKS - 1], format!("https://example.com/{}", MAX_LINKS - 1));
    }

    #[test]
    fn test_parse_url_list_dedupe_happens_before_cap() {
        let mut input = String::from("https://dup.example\n");
        for i in 0..12 {
            input.push_str("https://dup.example\n");
            input.push_str(&format!("https://example.com/{i}\n"));
        }
        let urls = parse_url_list(&input);
        assert_eq!(urls.len(), MAX_LINKS);
        assert_eq!(urls.iter().filter(|u| *u == "https://dup.example").count(), 1);
    }

    #[tokio::test]
    async fn test_read_url_list_empty_file_is_error() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        std::fs::write(file.path(), "\n  \n\t\n").expect("write");
        let result = read_url_list(file.path()).await;
        assert!(matches!(result, Err(InputError::NoUrls)));
    }

    #[tokio::test]
    async fn test_read_url_list_missing_file_is_read_error() {
        let result = read_url_list(Path::new("/definitely/not/here/urls.txt")).await;
        assert!(matches!(result, Err(InputError::Read(_))));
    }
}
