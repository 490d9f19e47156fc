//! General text extraction fallback
//!
//! Pulls the primary textual content out of an HTML page by collecting the
//! text of block-level content elements (paragraphs, headings, list items,
//! blockquotes, preformatted blocks). Script, style, and navigation chrome
//! are excluded simply by never being selected. Each block becomes one
//! whitespace-normalized line of the body.
//!
//! Whether the result is substantial enough to keep is the acquisition
//! dispatcher's call, not this module's.

use scraper::{Html, Selector};

/// Result of text extraction from an HTML page
#[derive(Debug, Clone)]
pub struct Extracted {
    /// Page title from the `<title>` element, if present and non-empty
    pub title: Option<String>,

    /// Extracted body text, one content block per line
    pub body: String,
}

/// Extracts title and body text from HTML
pub fn extract_text(html: &str) -> Extracted {
    let document = Html::parse_document(html);

    Extracted {
        title: extract_title(&document),
        body: extract_body(&document),
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_body(document: &Html) -> String {
    let selector = match Selector::parse("p, h1, h2, h3, h4, h5, h6, li, blockquote, pre") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let mut blocks = Vec::new();
    for element in document.select(&selector) {
        let text = element
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    blocks.join("\n")
}
