//! Washi: a polite plain-text corpus scraper
//!
//! This crate builds a small, deduplicated plain-text corpus by fetching a
//! bounded set of web pages, extracting their primary textual content, and
//! writing each page as a normalized text file until a total byte budget is
//! exhausted. It respects robots.txt and inserts a politeness delay between
//! every network operation.

pub mod config;
pub mod crawler;
pub mod ledger;
pub mod output;
pub mod robots;
pub mod seeds;

use thiserror::Error;

/// Main error type for Washi operations
#[derive(Debug, Error)]
pub enum WashiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Washi operations
pub type Result<T> = std::result::Result<T, WashiError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlSummary};
pub use ledger::{fingerprint, ContentFingerprint, CrawlLedger};
pub use robots::RobotsVerdict;
