//! Dedup and budget ledger
//!
//! Process-wide mutable state for a single run: which URLs have been
//! presented, which content fingerprints have been seen, and how many bytes
//! have been written so far. This is the sole gate on "can we still accept
//! more content".
//!
//! The check operations also mark: `already_visited` and `is_duplicate`
//! collapse check-and-mark into one call so that a URL or fingerprint can
//! never be admitted twice, even when the same candidate is discovered
//! through two different paths. The ledger is owned by the coordinator and
//! passed by reference; there are no globals and no persistence across runs.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Fixed-size hash of normalized body text, used only for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFingerprint([u8; 32]);

/// Computes the fingerprint of a page body
///
/// The text is trimmed before hashing so that leading/trailing whitespace
/// differences do not defeat duplicate detection.
pub fn fingerprint(body: &str) -> ContentFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(body.trim().as_bytes());
    ContentFingerprint(hasher.finalize().into())
}

/// Per-run dedup and budget state
#[derive(Debug)]
pub struct CrawlLedger {
    visited: HashSet<String>,
    seen: HashSet<ContentFingerprint>,
    total_bytes: u64,
    max_total_bytes: u64,
}

impl CrawlLedger {
    /// Creates an empty ledger with the given byte budget
    pub fn new(max_total_bytes: u64) -> Self {
        Self {
            visited: HashSet::new(),
            seen: HashSet::new(),
            total_bytes: 0,
            max_total_bytes,
        }
    }

    /// Returns true if this URL has been presented before; marks it visited
    /// as a side effect of the check
    pub fn already_visited(&mut self, url: &str) -> bool {
        !self.visited.insert(url.to_string())
    }

    /// Returns true if this fingerprint has been seen before; on first
    /// sight, marks it seen and returns false
    pub fn is_duplicate(&mut self, fp: ContentFingerprint) -> bool {
        !self.seen.insert(fp)
    }

    /// Returns true once the byte budget has been reached or exceeded
    pub fn budget_exhausted(&self) -> bool {
        self.total_bytes >= self.max_total_bytes
    }

    /// Adds `n` bytes to the running total
    pub fn record_bytes(&mut self, n: u64) {
        self.total_bytes += n;
    }

    /// Total bytes written so far
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Number of distinct URLs presented so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visit_not_already_visited() {
        let mut ledger = CrawlLedger::new(1000);
        assert!(!ledger.already_visited("https://example.com/a"));
    }

    #[test]
    fn test_second_visit_is_already_visited() {
        let mut ledger = CrawlLedger::new(1000);
        assert!(!ledger.already_visited("https://example.com/a"));
        assert!(ledger.already_visited("https://example.com/a"));
        assert_eq!(ledger.visited_count(), 1);
    }

    #[test]
    fn test_distinct_urls_tracked_separately() {
        let mut ledger = CrawlLedger::new(1000);
        assert!(!ledger.already_visited("https://example.com/a"));
        assert!(!ledger.already_visited("https://example.com/b"));
        assert_eq!(ledger.visited_count(), 2);
    }

    #[test]
    fn test_fingerprint_equality() {
        assert_eq!(fingerprint("body text"), fingerprint("body text"));
        assert_ne!(fingerprint("body text"), fingerprint("other text"));
    }

    #[test]
    fn test_fingerprint_ignores_surrounding_whitespace() {
        assert_eq!(fingerprint("  body text \n"), fingerprint("body text"));
    }

    #[test]
    fn test_duplicate_detection_marks_on_first_sight() {
        let mut ledger = CrawlLedger::new(1000);
        let fp = fingerprint("some page body");
        assert!(!ledger.is_duplicate(fp));
        assert!(ledger.is_duplicate(fp));
    }

    #[test]
    fn test_budget_not_exhausted_when_under() {
        let mut ledger = CrawlLedger::new(1000);
        ledger.record_bytes(999);
        assert!(!ledger.budget_exhausted());
    }

    #[test]
    fn test_budget_exhausted_at_limit() {
        let mut ledger = CrawlLedger::new(1000);
        ledger.record_bytes(1000);
        assert!(ledger.budget_exhausted());
    }

    #[test]
    fn test_budget_may_overshoot_by_one_page() {
        // The budget is checked before a write, never during one, so the
        // last accepted page may push the total past the limit.
        let mut ledger = CrawlLedger::new(1000);
        ledger.record_bytes(900);
        assert!(!ledger.budget_exhausted());
        ledger.record_bytes(500);
        assert!(ledger.budget_exhausted());
        assert_eq!(ledger.total_bytes(), 1400);
    }

    #[test]
    fn test_total_bytes_monotonic() {
        let mut ledger = CrawlLedger::new(1000);
        ledger.record_bytes(100);
        ledger.record_bytes(0);
        ledger.record_bytes(50);
        assert_eq!(ledger.total_bytes(), 150);
    }
}
