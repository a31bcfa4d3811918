//! Navigation link extraction from a site's main page

use crate::urljoin::join_page;
use scraper::Html;

/// Anchors inside these containers count as navigation links
const NAV_CONTAINERS: &str =
    "div.tabs a[href], ul.tablist a[href], div.navrow a[href], nav a[href], div#navrow1 a[href]";

/// Extracts related-page URLs from the main page's navigation containers
///
/// A link is classified as a related page when its text or address
/// suggests so (a "Related Pages" tab, a pages listing). Duplicate
/// addresses are collapsed, markup order preserved.
pub fn extract_related_pages(document: &Html, site: &str) -> Vec<String> {
    let mut related = Vec::new();

    for anchor in super::select_all(document, NAV_CONTAINERS) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let text = super::element_text(anchor).to_lowercase();

        if !is_related_link(&text, href) {
            continue;
        }

        let url = join_page(site, href);
        if !related.contains(&url) {
            related.push(url);
        }
    }

    related
}

/// True when link text or address marks a related/overview page
fn is_related_link(text: &str, href: &str) -> bool {
    text.contains("related") || text.contains("pages") || href.contains("pages")
}
