//! Class listing extraction
//!
//! Classes are collected from up to three conventional listing pages. Two
//! patterns are recognized on each: plain anchors whose address contains a
//! class-like marker, and definition-list term/definition pairs. A class
//! name seen once is never recorded again: first occurrence wins, across
//! pages and across patterns, with no merging.

use crate::model::ClassInfo;
use crate::urljoin::join_page;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Conventional class listing pages, tried in order
pub const CLASS_LISTING_PAGES: &[&str] = &["annotated.html", "classes.html", "hierarchy.html"];

/// Address markers that identify a link target as a class-like entity
const CLASS_MARKERS: &[&str] = &["class", "struct", "interface"];

/// Address markers recognized in definition-list terms
const DL_MARKERS: &[&str] = &["class", "struct"];

/// Extracts class entries from one listing page
///
/// `seen` carries the names already recorded from earlier pages or
/// patterns; entries whose exact name is present are suppressed.
///
/// # Arguments
///
/// * `document` - The parsed listing page
/// * `site` - Site root for address resolution
/// * `section` - Provenance label (the listing page's name)
/// * `seen` - Names recorded so far, updated in place
pub fn extract_class_entries(
    document: &Html,
    site: &str,
    section: &str,
    seen: &mut HashSet<String>,
) -> Vec<ClassInfo> {
    let mut classes = Vec::new();

    // Pattern (a): anchors whose address carries a class-like marker
    for anchor in super::select_all(document, "a[href]") {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !contains_marker(href, CLASS_MARKERS) {
            continue;
        }

        let name = super::element_text(anchor);
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }

        classes.push(class_info(name, href, String::new(), site, section));
    }

    // Pattern (b): definition-list term/definition pairs
    for term in super::select_all(document, "dl dt") {
        let Some((name, href)) = term_anchor(term) else {
            continue;
        };
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }

        let description = definition_text(term);
        classes.push(class_info(name, &href, description, site, section));
    }

    classes
}

fn class_info(
    name: String,
    href: &str,
    description: String,
    site: &str,
    section: &str,
) -> ClassInfo {
    let namespace = name
        .rsplit_once("::")
        .map(|(prefix, _)| prefix.to_string())
        .filter(|prefix| !prefix.is_empty());

    ClassInfo {
        name,
        url: join_page(site, href),
        description,
        namespace,
        section: section.to_string(),
    }
}

fn contains_marker(href: &str, markers: &[&str]) -> bool {
    let href = href.to_lowercase();
    markers.iter().any(|marker| href.contains(marker))
}

/// The term's anchor, when its address carries a class-like marker
fn term_anchor(term: ElementRef<'_>) -> Option<(String, String)> {
    let anchor_selector = Selector::parse("a[href]").ok()?;
    let anchor = term.select(&anchor_selector).next()?;
    let href = anchor.value().attr("href")?;

    if !contains_marker(href, DL_MARKERS) {
        return None;
    }

    Some((super::element_text(anchor), href.to_string()))
}

/// Text of the definition element following a term
fn definition_text(term: ElementRef<'_>) -> String {
    term.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "dd")
        .map(super::element_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://docs.example.com";

    fn extract(html: &str) -> Vec<ClassInfo> {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();
        extract_class_entries(&document, SITE, "annotated", &mut seen)
    }

    #[test]
    fn test_anchor_with_class_marker() {
        let classes = extract(
            r#"<html><body>
            <a href="classWidget.html">Widget</a>
            <a href="install.html">Install guide</a>
            </body></html>"#,
        );

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Widget");
        assert_eq!(classes[0].url, "https://docs.example.com/classWidget.html");
        assert_eq!(classes[0].section, "annotated");
    }

    #[test]
    fn test_struct_and_interface_markers() {
        let classes = extract(
            r#"<html><body>
            <a href="structPoint.html">Point</a>
            <a href="interfaceShape.html">Shape</a>
            </body></html>"#,
        );

        assert_eq!(classes.len(), 2);
    }

    #[test]
    fn test_duplicate_names_suppressed() {
        let classes = extract(
            r#"<html><body>
            <a href="classFoo.html">Foo</a>
            <a href="classFoo.html">Foo</a>
            </body></html>"#,
        );

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Foo");
    }

    #[test]
    fn test_definition_list_pair() {
        let classes = extract(
            r#"<html><body><dl>
            <dt><a href="classBuffer.html">Buffer</a></dt>
            <dd>A growable byte container</dd>
            </dl></body></html>"#,
        );

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Buffer");
        assert_eq!(classes[0].description, "A growable byte container");
    }

    #[test]
    fn test_first_pattern_wins_over_definition_list() {
        // The same name surfaced by both patterns is recorded once, from
        // the anchor pass, with no merge of the dd description.
        let classes = extract(
            r#"<html><body>
            <a href="classBuffer.html">Buffer</a>
            <dl><dt><a href="classBuffer.html">Buffer</a></dt><dd>desc</dd></dl>
            </body></html>"#,
        );

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].description, "");
    }

    #[test]
    fn test_namespace_derived_from_qualified_name() {
        let classes = extract(r#"<a href="classcore_1_1Widget.html">core::Widget</a>"#);

        assert_eq!(classes[0].name, "core::Widget");
        assert_eq!(classes[0].namespace.as_deref(), Some("core"));
    }

    #[test]
    fn test_seen_set_spans_pages() {
        let mut seen = HashSet::new();
        let first = Html::parse_document(r#"<a href="classFoo.html">Foo</a>"#);
        let second = Html::parse_document(r#"<a href="classFoo.html">Foo</a>"#);

        let a = extract_class_entries(&first, SITE, "annotated", &mut seen);
        let b = extract_class_entries(&second, SITE, "classes", &mut seen);

        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }
}
