//! Crawl orchestration
//!
//! The coordinator drives the run to completion within the byte budget:
//! seeds are processed in list order, each optionally expanded by a bounded
//! random sample of its outbound links, with a politeness pause after every
//! network operation.
//!
//! Processing a candidate is a chain of admission checks, each of which
//! short-circuits the rest: visited-URL ledger, byte budget, robots.txt
//! gate, acquisition, content fingerprint dedup, persistence. Every
//! decision point logs one line tagged with its signal (`ROBOTS-BLOCKED`,
//! `DUPLICATE`, `SAVED`, `ERROR`, `CRAWL-ERROR`). No single candidate's
//! failure is ever fatal to the run; the only early exit is budget
//! exhaustion.

use crate::config::{self, Config};
use crate::crawler::acquire::acquire;
use crate::crawler::fetcher::{build_http_client, fetch_page, is_html};
use crate::crawler::links::discover_links;
use crate::ledger::{fingerprint, CrawlLedger};
use crate::output::save_page;
use crate::robots::check_robots;
use crate::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Final tally of a crawl run
#[derive(Debug, Clone, Copy)]
pub struct CrawlSummary {
    /// Number of pages written to the output directory
    pub pages_saved: usize,

    /// Total bytes written (may exceed the budget by at most one page)
    pub total_bytes: u64,
}

/// Orchestrates one crawl run
///
/// Owns the run's mutable state: the shared HTTP client and the dedup and
/// budget ledger. Entirely sequential - one network operation in flight at
/// a time, each followed by a politeness pause.
pub struct Coordinator {
    config: Config,
    client: Client,
    ledger: CrawlLedger,
    pages_saved: usize,
}

impl Coordinator {
    /// Creates a coordinator for the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config::validate(&config)?;

        let client = build_http_client(&config.user_agent, config.timeout_seconds)?;
        let ledger = CrawlLedger::new(config.max_total_bytes);

        Ok(Self {
            config,
            client,
            ledger,
            pages_saved: 0,
        })
    }

    /// Runs the crawl over the seed list
    ///
    /// Seeds are taken in list order. When crawl expansion is enabled, each
    /// seed's page is fetched once more for link discovery and a uniform
    /// random sample of up to `max_follow` links is processed - one level
    /// deep only; links found on followed links are never expanded.
    pub async fn run(&mut self, seeds: &[String]) -> Result<CrawlSummary> {
        tracing::info!(
            "Starting crawl: {} seeds, budget {} bytes",
            seeds.len(),
            self.config.max_total_bytes
        );

        for seed in seeds {
            if self.ledger.budget_exhausted() {
                tracing::info!("Byte budget reached, stopping");
                break;
            }

            self.process_candidate(seed).await;
            self.politeness_pause().await;

            if self.config.crawl && !self.ledger.budget_exhausted() {
                self.expand_seed(seed).await;
            }
        }

        let summary = CrawlSummary {
            pages_saved: self.pages_saved,
            total_bytes: self.ledger.total_bytes(),
        };

        tracing::info!(
            "Crawl finished: {} pages, {} bytes",
            summary.pages_saved,
            summary.total_bytes
        );

        Ok(summary)
    }

    /// Processes one candidate URL through the full admission chain
    ///
    /// Never returns an error: every failure mode is logged and abandoned
    /// so the run continues with the next candidate.
    async fn process_candidate(&mut self, candidate: &str) {
        // Check-and-mark: a URL discovered via two paths is processed once
        if self.ledger.already_visited(candidate) {
            tracing::debug!("Skipping already visited {}", candidate);
            return;
        }

        if self.ledger.budget_exhausted() {
            return;
        }

        let url = match Url::parse(candidate) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!("ERROR {}: invalid URL ({})", candidate, e);
                return;
            }
        };

        let verdict = check_robots(&self.client, &url, &self.config.user_agent).await;
        if !verdict.permits() {
            tracing::info!("ROBOTS-BLOCKED {}", candidate);
            return;
        }

        match acquire(&self.client, &url).await {
            Ok(Some(record)) => {
                let fp = fingerprint(&record.body);
                if self.ledger.is_duplicate(fp) {
                    tracing::info!("DUPLICATE {}", candidate);
                    return;
                }

                match save_page(
                    &self.config.out,
                    &record.url,
                    record.title.as_deref(),
                    &record.body,
                ) {
                    Ok(bytes) => {
                        self.ledger.record_bytes(bytes);
                        self.pages_saved += 1;
                        tracing::info!(
                            "SAVED {} -> +{} bytes, total={}",
                            candidate,
                            bytes,
                            self.ledger.total_bytes()
                        );
                    }
                    Err(e) => {
                        tracing::error!("ERROR {}: {}", candidate, e);
                    }
                }
            }

            // Quality rejection; the dispatcher logged its signal already
            Ok(None) => {}

            Err(e) => {
                tracing::error!("ERROR {}: {}", candidate, e);
            }
        }
    }

    /// One-level link expansion for a seed
    ///
    /// Re-fetches the seed page for its markup (tolerating failure - the
    /// seed's own saved content is unaffected), discovers outbound links,
    /// shuffles them, and processes up to `max_follow` of them. The shuffle
    /// is deliberate: a best-effort uniform sample of the link set, not a
    /// prioritized frontier.
    async fn expand_seed(&mut self, seed: &str) {
        let seed_url = match Url::parse(seed) {
            Ok(u) => u,
            Err(_) => return,
        };

        let page = match fetch_page(&self.client, seed).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("CRAWL-ERROR seed={}: {}", seed, e);
                return;
            }
        };

        if !is_html(&page.content_type) {
            tracing::debug!("Seed {} is not HTML, skipping expansion", seed);
            return;
        }

        let mut links: Vec<Url> = discover_links(&seed_url, &page.body, self.config.same_domain)
            .into_iter()
            .collect();
        links.shuffle(&mut rand::rng());

        tracing::debug!(
            "Discovered {} links on {}, following up to {}",
            links.len(),
            seed,
            self.config.max_follow
        );

        for link in links.into_iter().take(self.config.max_follow) {
            if self.ledger.budget_exhausted() {
                break;
            }
            self.process_candidate(link.as_str()).await;
            self.politeness_pause().await;
        }
    }

    /// Politeness delay plus a sub-second random jitter, after every fetch
    async fn politeness_pause(&self) {
        let jitter: f64 = rand::rng().random();
        let pause = self.config.delay_seconds + jitter;
        tokio::time::sleep(Duration::from_secs_f64(pause)).await;
    }

    /// Read access to the ledger, for tests and summaries
    pub fn ledger(&self) -> &CrawlLedger {
        &self.ledger
    }
}
