//! Acquisition dispatcher
//!
//! Tries an ordered list of acquisition strategies and stops at the first
//! success:
//!
//! 1. `WikipediaRest` - the fast structured path, applicable only to URLs
//!    with the recognized article shape
//! 2. `FetchExtract` - the general fallback: fetch the raw page and run
//!    text extraction over it
//!
//! The dispatcher returns `Ok(None)` only for content-quality rejections
//! (non-HTML content type, extraction too short); transport errors
//! propagate so the orchestrator can log them at the candidate boundary.
//! The dispatcher never touches the ledger.

use crate::crawler::extract::extract_text;
use crate::crawler::fetcher::{fetch_page, is_html};
use crate::crawler::wiki;
use crate::Result;
use reqwest::Client;
use url::Url;

/// Minimum trimmed body length (chars) for the general fallback to count
/// as a successful extraction. A heuristic quality gate, not a property of
/// the page.
pub const MIN_BODY_CHARS: usize = 300;

/// The result of successful acquisition, consumed once by persistence
#[derive(Debug, Clone)]
pub struct ContentRecord {
    /// The candidate URL the content was acquired for
    pub url: String,

    /// Best-effort page title
    pub title: Option<String>,

    /// Extracted body text
    pub body: String,
}

/// An acquisition strategy, tried in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionStrategy {
    /// Plaintext REST endpoint for recognized encyclopedic article URLs
    WikipediaRest,

    /// Generic fetch + text extraction
    FetchExtract,
}

/// The strategy order tried for every candidate
pub const STRATEGY_ORDER: [AcquisitionStrategy; 2] = [
    AcquisitionStrategy::WikipediaRest,
    AcquisitionStrategy::FetchExtract,
];

/// Acquires content for a candidate URL
///
/// # Returns
///
/// * `Ok(Some(ContentRecord))` - Content acquired by the first applicable
///   strategy
/// * `Ok(None)` - Every strategy declined: unrecognized structured shape
///   plus a quality rejection on the fallback (logged here with its signal)
/// * `Err(WashiError)` - Transport failure in whichever strategy was active
pub async fn acquire(client: &Client, url: &Url) -> Result<Option<ContentRecord>> {
    for strategy in STRATEGY_ORDER {
        match strategy {
            AcquisitionStrategy::WikipediaRest => {
                if let Some((title, body)) = wiki::fetch_plain(client, url).await? {
                    return Ok(Some(ContentRecord {
                        url: url.to_string(),
                        title: Some(title),
                        body,
                    }));
                }
                // Shape not recognized or endpoint declined: next strategy
            }

            AcquisitionStrategy::FetchExtract => {
                let page = fetch_page(client, url.as_str()).await?;

                if !is_html(&page.content_type) {
                    tracing::info!("SKIP-NONHTML {} ({})", url, page.content_type);
                    return Ok(None);
                }

                let extracted = extract_text(&page.body);
                if extracted.body.trim().chars().count() < MIN_BODY_CHARS {
                    tracing::info!("EXTRACTION-FAILED/SHORT {}", url);
                    return Ok(None);
                }

                return Ok(Some(ContentRecord {
                    url: url.to_string(),
                    title: extracted.title,
                    body: extracted.body,
                }));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_order_structured_first() {
        assert_eq!(STRATEGY_ORDER[0], AcquisitionStrategy::WikipediaRest);
        assert_eq!(STRATEGY_ORDER[1], AcquisitionStrategy::FetchExtract);
    }

    // Network behavior of the dispatcher (non-HTML skip, short-extraction
    // rejection, fallback ordering) is covered end-to-end in
    // tests/crawl_tests.rs with wiremock servers.
}
