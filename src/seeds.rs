//! Seed list loading
//!
//! Seeds are read once at startup from a plain text file, one URL per line.
//! Blank lines and lines starting with `#` are ignored; everything else is
//! taken verbatim (after trimming) in file order.

use crate::ConfigError;
use std::path::Path;

/// Loads seed URLs from a file
///
/// # Arguments
///
/// * `path` - Path to the seed file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Seed URLs in file order (may be empty)
/// * `Err(ConfigError)` - The file could not be read
pub fn load_seeds(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let seeds = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(seeds)
}
