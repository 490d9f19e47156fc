//! HTTP fetcher
//!
//! Builds the shared HTTP client and performs page fetches. All network
//! traffic for a run goes through the one client built here, so the
//! User-Agent and timeout are applied uniformly - including to robots.txt
//! requests.

use crate::WashiError;
use reqwest::Client;
use std::time::Duration;

/// A successfully fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after any redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Content-Type header value (empty string when absent)
    pub content_type: String,

    /// Response body
    pub body: String,
}

/// Builds the HTTP client used for the whole run
///
/// # Arguments
///
/// * `user_agent` - User-Agent header value
/// * `timeout_seconds` - Per-request timeout
pub fn build_http_client(user_agent: &str, timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_seconds))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page with a GET request
///
/// Transport failures and non-success statuses are returned as errors so
/// the caller can log and abandon the candidate; content-type and quality
/// decisions belong to the acquisition dispatcher, not here.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, WashiError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| WashiError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(WashiError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response.text().await.map_err(|source| WashiError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        content_type,
        body,
    })
}

/// Returns true when a Content-Type header denotes HTML
pub fn is_html(content_type: &str) -> bool {
    content_type.contains("text/html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("TestBot/1.0", 20);
        assert!(client.is_ok());
    }

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(!is_html("application/pdf"));
        assert!(!is_html("application/json"));
        assert!(!is_html(""));
    }
}
