//! Crawl pipeline
//!
//! This module drives content acquisition end-to-end:
//! - `fetcher` builds the HTTP client and performs page fetches
//! - `wiki` is the fast structured path for encyclopedic article URLs
//! - `extract` is the general text-extraction fallback
//! - `acquire` dispatches between the two acquisition strategies
//! - `links` discovers outbound links for one-level expansion
//! - `coordinator` orchestrates seeds, expansion, dedup, and the budget

mod acquire;
mod coordinator;
mod extract;
mod fetcher;
mod links;
mod wiki;

pub use acquire::{acquire, AcquisitionStrategy, ContentRecord, MIN_BODY_CHARS};
pub use coordinator::{Coordinator, CrawlSummary};
pub use extract::{extract_text, Extracted};
pub use fetcher::{build_http_client, fetch_page, is_html, FetchedPage};
pub use links::discover_links;

use crate::config::Config;
use crate::seeds::load_seeds;
use crate::Result;

/// Runs a full crawl for the given configuration
///
/// Loads the seed list, creates the output directory, and processes every
/// seed (plus optional one-level expansion) until the byte budget or the
/// seed list is exhausted.
pub async fn crawl(config: Config) -> Result<CrawlSummary> {
    let seeds = load_seeds(&config.seeds)?;
    std::fs::create_dir_all(&config.out)?;

    let mut coordinator = Coordinator::new(config)?;
    coordinator.run(&seeds).await
}
