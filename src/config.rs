//! Run configuration
//!
//! All options are supplied on the command line and are immutable for the
//! duration of a run. Defaults match the documented configuration surface:
//! a ~1.2 MB corpus budget, a 2 second politeness delay, and a 20 second
//! per-request timeout.

use crate::ConfigError;
use std::path::PathBuf;

/// Default User-Agent, identifying the scraper and a contact address
pub const DEFAULT_USER_AGENT: &str =
    "RAG-Course-Scraper/1.0 (+https://example.edu; contact=student@example.com)";

/// Default corpus size budget in bytes (~1.2 MB)
pub const DEFAULT_MAX_TOTAL_BYTES: u64 = 1_200_000;

/// Default politeness delay between requests, in seconds
pub const DEFAULT_DELAY_SECONDS: f64 = 2.0;

/// Default per-request HTTP timeout, in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

/// Default number of extra links to follow per seed when crawling
pub const DEFAULT_MAX_FOLLOW: usize = 5;

/// Configuration for a single crawl run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the seed URL list (one URL per line)
    pub seeds: PathBuf,

    /// Directory to write .txt output files into
    pub out: PathBuf,

    /// Corpus size budget in bytes; the run stops admitting new pages once
    /// this many bytes have been written
    pub max_total_bytes: u64,

    /// Politeness delay between network operations, in seconds; a random
    /// sub-second jitter is added on top of this
    pub delay_seconds: f64,

    /// Per-request HTTP timeout, in seconds
    pub timeout_seconds: u64,

    /// Enables one-level link expansion from each seed page
    pub crawl: bool,

    /// Maximum number of discovered links to follow per seed
    pub max_follow: usize,

    /// When expanding, only follow links within the seed's domain
    pub same_domain: bool,

    /// User-Agent header sent with every request (including robots.txt)
    pub user_agent: String,
}

impl Config {
    /// Creates a configuration with default limits for the given seed file
    /// and output directory
    pub fn new(seeds: PathBuf, out: PathBuf) -> Self {
        Self {
            seeds,
            out,
            max_total_bytes: DEFAULT_MAX_TOTAL_BYTES,
            delay_seconds: DEFAULT_DELAY_SECONDS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            crawl: false,
            max_follow: DEFAULT_MAX_FOLLOW,
            same_domain: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Validates a configuration before the run starts
///
/// # Returns
///
/// * `Ok(())` - The configuration is usable
/// * `Err(ConfigError::Validation)` - A limit is out of range
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.max_total_bytes == 0 {
        return Err(ConfigError::Validation(
            "max_total_bytes must be greater than zero".to_string(),
        ));
    }

    if !config.delay_seconds.is_finite() || config.delay_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay_seconds must be a non-negative number, got {}",
            config.delay_seconds
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(ConfigError::Validation(
            "timeout must be greater than zero".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent must not be empty".to_string(),
        ));
    }

    Ok(())
}
