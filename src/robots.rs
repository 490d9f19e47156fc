//! Politeness gate: robots.txt allow/deny decisions
//!
//! For each candidate URL the gate resolves the origin, fetches that
//! origin's `/robots.txt`, and evaluates it with the robotstxt crate.
//!
//! The gate fails open: when robots.txt cannot be retrieved for any reason
//! (network failure, timeout, non-success status) the verdict is
//! [`RobotsVerdict::UnknownAllowed`]. This is a documented policy choice
//! for small-scale academic scraping, not an error being swallowed -
//! callers that need strict robots enforcement must not rely on this gate.

use reqwest::Client;
use robotstxt::DefaultMatcher;
use url::Url;

/// Outcome of a robots.txt check
///
/// The permissive default is a separate variant so it stays visible at the
/// decision site instead of collapsing into a plain `Allowed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsVerdict {
    /// robots.txt was fetched and explicitly permits the URL
    Allowed,

    /// robots.txt was fetched and denies the URL for our user agent
    Disallowed,

    /// robots.txt could not be retrieved; treated as allowed by policy
    UnknownAllowed,
}

impl RobotsVerdict {
    /// Returns true unless the URL was explicitly disallowed
    pub fn permits(&self) -> bool {
        !matches!(self, RobotsVerdict::Disallowed)
    }
}

/// Checks whether `url` may be fetched by `user_agent` under the origin's
/// robots.txt rules
///
/// One network request per call; the caller's politeness delay covers it.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The candidate URL (already parsed)
/// * `user_agent` - The user agent string to evaluate rules for
pub async fn check_robots(client: &Client, url: &Url, user_agent: &str) -> RobotsVerdict {
    let robots_url = match robots_location(url) {
        Some(u) => u,
        None => return RobotsVerdict::UnknownAllowed,
    };

    let response = match client.get(robots_url.clone()).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("robots.txt fetch failed for {}: {}", robots_url, e);
            return RobotsVerdict::UnknownAllowed;
        }
    };

    if !response.status().is_success() {
        // Missing robots.txt (404 etc.) means no restrictions
        return RobotsVerdict::UnknownAllowed;
    }

    let body = match response.text().await {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!("robots.txt body read failed for {}: {}", robots_url, e);
            return RobotsVerdict::UnknownAllowed;
        }
    };

    if evaluate(&body, url.as_str(), user_agent) {
        RobotsVerdict::Allowed
    } else {
        RobotsVerdict::Disallowed
    }
}

/// Builds the robots.txt URL for the origin of `url`
fn robots_location(url: &Url) -> Option<Url> {
    let host = url.host_str()?;
    let mut location = format!("{}://{}", url.scheme(), host);
    if let Some(port) = url.port() {
        location.push_str(&format!(":{}", port));
    }
    location.push_str("/robots.txt");
    Url::parse(&location).ok()
}

/// Evaluates robots.txt content against a URL and user agent
///
/// Pure function over fetched content, split out so rule evaluation can be
/// tested without a server.
pub fn evaluate(robots_body: &str, url: &str, user_agent: &str) -> bool {
    let mut matcher = DefaultMatcher::default();
    matcher.one_agent_allowed_by_robots(robots_body, user_agent, url)
}
