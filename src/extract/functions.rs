//! Free function extraction from function listing pages

use crate::extract::tokenize::parse_method_prototype;
use crate::model::FunctionInfo;
use crate::urljoin::join_page;
use scraper::{Html, Selector};

/// Maximum function listing pages followed from the main page
pub const MAX_FUNCTION_PAGES: usize = 3;

/// Collects function listing page addresses from the main page
///
/// Links qualify when their address contains "function"; at most
/// [`MAX_FUNCTION_PAGES`] distinct addresses are returned.
pub fn function_page_links(document: &Html, site: &str) -> Vec<String> {
    let mut links = Vec::new();

    for anchor in super::select_all(document, "a[href]") {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.to_lowercase().contains("function") {
            continue;
        }

        let url = join_page(site, href);
        if !links.contains(&url) {
            links.push(url);
        }
        if links.len() == MAX_FUNCTION_PAGES {
            break;
        }
    }

    links
}

/// Extracts at most the first documentation block as a function record
pub fn extract_first_function(document: &Html, url: &str) -> Option<FunctionInfo> {
    let block = super::select_all(document, "div.memitem").into_iter().next()?;

    let prototype = Selector::parse(".memproto")
        .ok()
        .and_then(|sel| block.select(&sel).next())
        .map(super::element_text)
        .unwrap_or_else(|| super::element_text(block));

    let parts = parse_method_prototype(&prototype)?;

    let description = Selector::parse(".memdoc")
        .ok()
        .and_then(|sel| block.select(&sel).next())
        .map(super::element_text)
        .unwrap_or_default();

    Some(FunctionInfo {
        name: parts.name,
        url: url.to_string(),
        description,
        parameters: parts.parameters,
        return_type: parts.return_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://docs.example.com";

    #[test]
    fn test_function_links_capped_at_three() {
        let html = r#"<html><body>
            <a href="globals_func.html">Functions</a>
            <a href="functions_a.html">a</a>
            <a href="functions_b.html">b</a>
            <a href="functions_c.html">c</a>
            </body></html>"#;
        let document = Html::parse_document(html);

        let links = function_page_links(&document, SITE);
        assert_eq!(links.len(), MAX_FUNCTION_PAGES);
        assert_eq!(links[0], "https://docs.example.com/globals_func.html");
    }

    #[test]
    fn test_non_function_links_ignored() {
        let html = r#"<a href="annotated.html">Classes</a>"#;
        let document = Html::parse_document(html);
        assert!(function_page_links(&document, SITE).is_empty());
    }

    #[test]
    fn test_first_block_only() {
        let html = r#"<html><body>
            <div class="memitem">
              <div class="memproto">double clamp(double v, double lo, double hi)</div>
              <div class="memdoc">Restricts a value to a range.</div>
            </div>
            <div class="memitem">
              <div class="memproto">void ignored()</div>
            </div>
            </body></html>"#;
        let document = Html::parse_document(html);

        let function = extract_first_function(&document, "https://docs.example.com/globals_func.html")
            .unwrap();
        assert_eq!(function.name, "clamp");
        assert_eq!(function.return_type, "double");
        assert_eq!(function.parameters, "double v, double lo, double hi");
        assert_eq!(function.description, "Restricts a value to a range.");
    }

    #[test]
    fn test_page_without_blocks() {
        let document = Html::parse_document("<html><body><p>empty</p></body></html>");
        assert!(extract_first_function(&document, "u").is_none());
    }
}
