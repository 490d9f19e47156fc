//! Washi main entry point
//!
//! Command-line interface for the Washi corpus scraper.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use washi::config::{
    Config, DEFAULT_DELAY_SECONDS, DEFAULT_MAX_FOLLOW, DEFAULT_MAX_TOTAL_BYTES,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use washi::crawler::crawl;

/// Washi: a polite plain-text corpus scraper
///
/// Fetches a bounded set of web pages, extracts their primary textual
/// content, and writes each as a normalized text file until a total byte
/// budget is exhausted. Respects robots.txt and pauses politely between
/// requests.
#[derive(Parser, Debug)]
#[command(name = "washi")]
#[command(version)]
#[command(about = "A polite plain-text corpus scraper", long_about = None)]
struct Cli {
    /// Path to a file with seed URLs (one per line, # for comments)
    #[arg(long, value_name = "FILE")]
    seeds: PathBuf,

    /// Directory to save .txt files into
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Corpus size budget in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_TOTAL_BYTES)]
    max_total_bytes: u64,

    /// Polite delay between requests, in seconds
    #[arg(long, default_value_t = DEFAULT_DELAY_SECONDS)]
    delay_seconds: f64,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    timeout: u64,

    /// Enable light one-level crawling from each seed
    #[arg(long)]
    crawl: bool,

    /// Max extra links to follow per seed when crawling
    #[arg(long, default_value_t = DEFAULT_MAX_FOLLOW)]
    max_follow: usize,

    /// When crawling, stay within each seed's domain
    #[arg(long)]
    same_domain: bool,

    /// Custom User-Agent
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config {
        seeds: cli.seeds,
        out: cli.out.clone(),
        max_total_bytes: cli.max_total_bytes,
        delay_seconds: cli.delay_seconds,
        timeout_seconds: cli.timeout,
        crawl: cli.crawl,
        max_follow: cli.max_follow,
        same_domain: cli.same_domain,
        user_agent: cli.user_agent,
    };

    let summary = crawl(config).await.context("crawl failed")?;

    // Partial corpora are a success state; always exit 0 after the run
    let out_dir = cli
        .out
        .canonicalize()
        .unwrap_or_else(|_| cli.out.clone());
    println!(
        "Done. Wrote ~{} bytes to {}",
        summary.total_bytes,
        out_dir.display()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("washi=info,warn"),
            1 => EnvFilter::new("washi=debug,info"),
            2 => EnvFilter::new("washi=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
