//! Plain-text reduction of documentation pages
//!
//! Used by the index builder and the page-content operation: navigation,
//! footer, script and style subtrees are skipped during traversal, and the
//! remaining text is collapsed to single-spaced plain text.

use scraper::{ElementRef, Html};

/// Element names whose entire subtree is excluded from extracted text
const STRIPPED_TAGS: &[&str] = &["script", "style", "nav", "footer"];

/// Reduces a parsed page to collapsed plain text
///
/// # Arguments
///
/// * `document` - The parsed page
///
/// # Returns
///
/// Single-spaced text with navigation/footer/script/style content removed
pub fn page_text(document: &Html) -> String {
    let mut out = String::new();
    collect_visible_text(document.root_element(), &mut out);
    super::collapse_whitespace(&out)
}

/// Walks an element's children, accumulating text outside stripped subtrees
fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if STRIPPED_TAGS.contains(&name) {
                continue;
            }
            collect_visible_text(child_element, out);
        } else if let scraper::Node::Text(text) = child.value() {
            out.push_str(&text.text);
            out.push(' ');
        }
    }
}

/// Truncates a string to at most `cap` characters
pub fn cap_chars(text: &str, cap: usize) -> String {
    if text.chars().count() > cap {
        text.chars().take(cap).collect()
    } else {
        text.to_string()
    }
}
