//! Link discovery for one-level crawl expansion
//!
//! Given a page's raw markup, yields the set of candidate outbound URLs:
//! anchors resolved to absolute URLs against the page's own URL, with
//! fragment-only, mailto:, javascript:, tel:, and data: hrefs dropped.
//! When `same_domain_only` is set, URLs pointing at a different host than
//! the base URL are dropped as well.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Discovers candidate outbound links in an HTML page
///
/// # Arguments
///
/// * `base_url` - The page's URL, used to resolve relative hrefs
/// * `html` - Raw page markup
/// * `same_domain_only` - Drop links whose host differs from the base host
///
/// # Returns
///
/// A set of absolute URLs; no ordering, no duplicates.
pub fn discover_links(base_url: &Url, html: &str, same_domain_only: bool) -> HashSet<Url> {
    let document = Html::parse_document(html);
    let mut links = HashSet::new();

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return links,
    };

    let base_host = base_url.host_str();

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(h) => h.trim(),
            None => continue,
        };

        let resolved = match resolve_href(href, base_url) {
            Some(u) => u,
            None => continue,
        };

        if same_domain_only && resolved.host_str() != base_host {
            continue;
        }

        links.insert(resolved);
    }

    links
}

/// Resolves an href to an absolute http(s) URL, or rejects it
///
/// Returns `None` for empty hrefs, fragment-only anchors, non-navigational
/// schemes (javascript:, mailto:, tel:, data:), unresolvable hrefs, and
/// anything that does not end up http or https.
fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let resolved = base_url.join(href).ok()?;
    if resolved.scheme() == "http" || resolved.scheme() == "https" {
        Some(resolved)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    fn hrefs(html: &str, same_domain: bool) -> HashSet<String> {
        discover_links(&base_url(), html, same_domain)
            .into_iter()
            .map(|u| u.to_string())
            .collect()
    }

    #[test]
    fn test_absolute_and_relative_links() {
        let html = r#"<html><body>
            <a href="https://other.com/a">A</a>
            <a href="/b">B</a>
            <a href="c">C</a>
        </body></html>"#;
        let links = hrefs(html, false);
        assert!(links.contains("https://other.com/a"));
        assert!(links.contains("https://example.com/b"));
        assert!(links.contains("https://example.com/c"));
    }

    #[test]
    fn test_skip_fragment_only() {
        let html = r##"<html><body><a href="#section">Jump</a></body></html>"##;
        assert!(hrefs(html, false).is_empty());
    }

    #[test]
    fn test_skip_pseudo_schemes() {
        let html = r#"<html><body>
            <a href="javascript:void(0)">J</a>
            <a href="mailto:a@example.com">M</a>
            <a href="tel:+123">T</a>
            <a href="data:text/plain,x">D</a>
        </body></html>"#;
        assert!(hrefs(html, false).is_empty());
    }

    #[test]
    fn test_same_domain_filter() {
        let html = r#"<html><body>
            <a href="https://other.com/a">Off-site</a>
            <a href="/local">Local</a>
        </body></html>"#;
        let links = hrefs(html, true);
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/local"));
    }

    #[test]
    fn test_no_duplicates() {
        let html = r#"<html><body>
            <a href="/same">One</a>
            <a href="/same">Two</a>
        </body></html>"#;
        assert_eq!(hrefs(html, false).len(), 1);
    }

    #[test]
    fn test_href_with_fragment_kept() {
        // Only fragment-ONLY hrefs are dropped; a path plus fragment still
        // names a page and is deduped later by the visited-URL ledger
        let html = r#"<html><body><a href="/doc#a">A</a></body></html>"#;
        let links = hrefs(html, false);
        assert_eq!(links.len(), 1);
    }
}
