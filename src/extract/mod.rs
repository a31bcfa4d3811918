//! Structural extractors over documentation markup
//!
//! Each extractor parses one fetched page into typed records using
//! tolerant, best-effort rules rather than a strict grammar, including:
//! - Navigation links and related-page classification
//! - Module and file listing tables
//! - Class listings across the conventional listing pages
//! - Class detail pages (methods, properties, inheritance)
//! - Free function pages
//! - Plain-text reduction for indexing
//!
//! Extractors are independent functions over a parsed document; new rules
//! for unfamiliar markup variants slot in without touching caching or
//! indexing logic.

pub mod classes;
pub mod detail;
pub mod functions;
pub mod listing;
pub mod navigation;
pub mod text;
pub mod tokenize;

use scraper::{ElementRef, Html, Selector};

/// Extracts the page title from the document
pub fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Selects all elements matching a selector, tolerating selector errors
///
/// Extraction is best-effort throughout: a selector that fails to parse
/// yields no matches instead of an error.
pub(crate) fn select_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => document.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

/// Collapsed text content of one element
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Collapses any whitespace runs to single spaces and trims the ends
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
