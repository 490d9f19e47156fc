//! Output file persistence
//!
//! Each accepted page becomes one `.txt` file in the output directory. The
//! file name is derived deterministically from the URL: a sanitized
//! host+path fragment plus a short hash of the full URL, so two distinct
//! URLs can never collide even when their sanitized fragments match.
//!
//! File layout: three header lines (`URL:`, `TITLE:`, `CRAWLED_AT:`), a
//! blank line, then the extracted body text with a trailing newline.

use chrono::Local;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use url::Url;

/// Derives a filesystem-safe file stem from a URL
///
/// The stem is `{sanitized host+path}-{first 8 hex chars of SHA-256(url)}`.
/// Characters outside `[a-zA-Z0-9-_.]` are collapsed into single dashes;
/// a URL with no usable host/path falls back to `page`.
pub fn slugify(url: &str) -> String {
    let base = match Url::parse(url) {
        Ok(parsed) => format!("{}{}", parsed.host_str().unwrap_or(""), parsed.path()),
        Err(_) => url.to_string(),
    };

    let mut sanitized = String::with_capacity(base.len());
    for c in base.trim_matches('/').chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            sanitized.push(c);
        } else if !sanitized.ends_with('-') {
            sanitized.push('-');
        }
    }
    let sanitized = sanitized.trim_matches('-');

    let stem = if sanitized.is_empty() {
        "page"
    } else {
        sanitized
    };

    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("{}-{}", stem, &digest[..8])
}

/// Writes one page to the output directory
///
/// # Arguments
///
/// * `out_dir` - Directory the file is written into (must exist)
/// * `url` - The page's URL, recorded in the header
/// * `title` - Best-effort page title; the header line is empty when unknown
/// * `body` - Extracted body text; trimmed before writing
///
/// # Returns
///
/// * `Ok(u64)` - Number of bytes written (headers included); this is the
///   unit the budget ledger accounts in
/// * `Err(std::io::Error)` - The file could not be written
pub fn save_page(
    out_dir: &Path,
    url: &str,
    title: Option<&str>,
    body: &str,
) -> std::io::Result<u64> {
    let path = out_dir.join(format!("{}.txt", slugify(url)));

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let content = format!(
        "URL: {}\nTITLE: {}\nCRAWLED_AT: {}\n\n{}\n",
        url,
        title.unwrap_or(""),
        timestamp,
        body.trim()
    );

    fs::write(&path, &content)?;
    Ok(content.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_slugify_host_and_path() {
        let slug = slugify("https://en.wikipedia.org/wiki/Otter");
        assert!(slug.starts_with("en.wikipedia.org-wiki-Otter-"));
    }

    #[test]
    fn test_slugify_is_deterministic() {
        let a = slugify("https://example.com/a/b");
        let b = slugify("https://example.com/a/b");
        assert_eq!(a, b);
    }

    #[test]
    fn test_slugify_distinct_urls_differ() {
        // Same sanitized fragment, different query strings
        let a = slugify("https://example.com/page?q=1");
        let b = slugify("https://example.com/page?q=2");
        assert_ne!(a, b);
    }

    #[test]
    fn test_slugify_collapses_special_chars() {
        let slug = slugify("https://example.com/a/b%20c");
        assert!(!slug.contains('/'));
        assert!(!slug.contains('%'));
        assert!(!slug.contains("--"));
    }

    #[test]
    fn test_slugify_bare_host() {
        let slug = slugify("https://example.com/");
        assert!(slug.starts_with("example.com-"));
    }

    #[test]
    fn test_save_page_format() {
        let dir = tempdir().unwrap();
        let bytes = save_page(
            dir.path(),
            "https://example.com/a",
            Some("A Title"),
            "  Body text here.  \n",
        )
        .unwrap();

        let path = dir
            .path()
            .join(format!("{}.txt", slugify("https://example.com/a")));
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("URL: https://example.com/a\nTITLE: A Title\nCRAWLED_AT: "));
        assert!(content.contains("\n\nBody text here.\n"));
        assert!(content.ends_with('\n'));
        assert_eq!(bytes, content.len() as u64);
    }

    #[test]
    fn test_save_page_without_title() {
        let dir = tempdir().unwrap();
        save_page(dir.path(), "https://example.com/b", None, "Body").unwrap();

        let path = dir
            .path()
            .join(format!("{}.txt", slugify("https://example.com/b")));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\nTITLE: \n"));
    }
}
