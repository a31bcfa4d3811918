//! Module and file listing extraction
//!
//! Listing pages enumerate entities of one kind in table form. A row
//! qualifies if it contains a link; the entry's name is the link text,
//! its address is resolved against the site root, and its description is
//! the last table cell's text.

use crate::model::{FileInfo, ModuleInfo};
use crate::urljoin::join_page;
use scraper::{ElementRef, Html, Selector};

/// Extracts module entries from the module listing page
pub fn extract_modules(document: &Html, site: &str) -> Vec<ModuleInfo> {
    listing_rows(document, site)
        .into_iter()
        .map(|row| ModuleInfo {
            name: row.name,
            url: row.url,
            description: row.description,
            classes: Vec::new(),
            functions: Vec::new(),
        })
        .collect()
}

/// Extracts file entries from the file listing page
pub fn extract_files(document: &Html, site: &str) -> Vec<FileInfo> {
    listing_rows(document, site)
        .into_iter()
        .map(|row| FileInfo {
            name: row.name,
            url: row.url,
            description: row.description,
            classes: Vec::new(),
            functions: Vec::new(),
        })
        .collect()
}

struct ListingRow {
    name: String,
    url: String,
    description: String,
}

/// Walks all table rows, keeping those that carry a link
fn listing_rows(document: &Html, site: &str) -> Vec<ListingRow> {
    let mut rows = Vec::new();

    for row in super::select_all(document, "table tr") {
        if let Some(parsed) = parse_row(row, site) {
            rows.push(parsed);
        }
    }

    rows
}

fn parse_row(row: ElementRef<'_>, site: &str) -> Option<ListingRow> {
    let anchor_selector = Selector::parse("a[href]").ok()?;
    let cell_selector = Selector::parse("td").ok()?;

    let anchor = row.select(&anchor_selector).next()?;
    let href = anchor.value().attr("href")?;

    let name = super::element_text(anchor);
    if name.is_empty() {
        return None;
    }

    let description = row
        .select(&cell_selector)
        .last()
        .map(super::element_text)
        .unwrap_or_default();

    Some(ListingRow {
        name,
        url: join_page(site, href),
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://docs.example.com";

    const MODULES_HTML: &str = r#"<html><body><table>
        <tr><td><a href="group__core.html">Core</a></td><td>Core primitives</td></tr>
        <tr><td>No link here</td><td>skipped</td></tr>
        <tr><td><a href="group__io.html">IO</a></td><td>Input and output</td></tr>
        </table></body></html>"#;

    #[test]
    fn test_rows_with_links_qualify() {
        let document = Html::parse_document(MODULES_HTML);
        let modules = extract_modules(&document, SITE);

        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].name, "Core");
        assert_eq!(modules[0].url, "https://docs.example.com/group__core.html");
        assert_eq!(modules[0].description, "Core primitives");
        assert_eq!(modules[1].name, "IO");
    }

    #[test]
    fn test_description_is_last_cell() {
        let html = r#"<html><body><table>
            <tr><td>icon</td><td><a href="files.html">files.h</a></td><td>All the declarations</td></tr>
            </table></body></html>"#;
        let document = Html::parse_document(html);
        let files = extract_files(&document, SITE);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "files.h");
        assert_eq!(files[0].description, "All the declarations");
    }

    #[test]
    fn test_missing_listing_yields_empty() {
        let document = Html::parse_document("<html><body><p>Not found</p></body></html>");
        assert!(extract_modules(&document, SITE).is_empty());
        assert!(extract_files(&document, SITE).is_empty());
    }

    #[test]
    fn test_placeholder_lists_stay_empty() {
        let document = Html::parse_document(MODULES_HTML);
        let modules = extract_modules(&document, SITE);
        assert!(modules[0].classes.is_empty());
        assert!(modules[0].functions.is_empty());
    }
}
