//! Search index construction from navigation data
//!
//! Sampling is fixed: the main page, then the first classes, files and
//! modules from the navigation structure, each reduced to a compact
//! length-capped record. Pages are fetched one at a time; the serial
//! loop shapes outbound load and is not to be parallelized. A page that
//! fails to fetch is skipped with a warning; building never fails as a
//! whole once navigation data exists.

use crate::engine::PageFetcher;
use crate::extract::text::{cap_chars, page_text};
use crate::extract::extract_title;
use crate::model::{NavigationStructure, PageKind, PageRecord, Partial, SearchIndex, BODY_CAP};
use scraper::Html;

/// Classes sampled into the index
pub const MAX_INDEXED_CLASSES: usize = 5;

/// Files sampled into the index
pub const MAX_INDEXED_FILES: usize = 3;

/// Modules sampled into the index
pub const MAX_INDEXED_MODULES: usize = 2;

/// One page scheduled for indexing
struct SampledPage {
    url: String,
    kind: PageKind,
    section: String,
}

/// Builds a fresh index for a site from its navigation structure
///
/// # Arguments
///
/// * `fetcher` - The page cache to fetch through
/// * `site` - The site address the index is for
/// * `nav` - Navigation data selecting the sampled pages
pub async fn build_index(
    fetcher: &mut PageFetcher,
    site: &str,
    nav: &NavigationStructure,
) -> Partial<SearchIndex> {
    let plan = sample_plan(nav);
    let mut pages = Vec::new();
    let mut warnings = Vec::new();

    // One page at a time, in plan order
    for sampled in plan {
        match fetcher.fetch(&sampled.url).await {
            Ok(body) => {
                let document = Html::parse_document(&body);
                let title =
                    extract_title(&document).unwrap_or_else(|| sampled.url.clone());
                let body = cap_chars(&page_text(&document), BODY_CAP);
                pages.push(PageRecord::new(
                    sampled.url,
                    title,
                    body,
                    sampled.kind,
                    sampled.section,
                ));
            }
            Err(e) => {
                tracing::warn!("Omitting {} from index: {}", sampled.url, e);
                warnings.push(format!("omitted {}: {}", sampled.url, e));
            }
        }
    }

    tracing::info!("Indexed {} pages for {}", pages.len(), site);

    Partial::with_warnings(SearchIndex::new(site.to_string(), pages), warnings)
}

/// The fixed sampling policy over a navigation structure
fn sample_plan(nav: &NavigationStructure) -> Vec<SampledPage> {
    let mut plan = vec![SampledPage {
        url: nav.main_page.clone(),
        kind: PageKind::Page,
        section: "main".to_string(),
    }];

    for class in nav.classes.iter().take(MAX_INDEXED_CLASSES) {
        plan.push(SampledPage {
            url: class.url.clone(),
            kind: PageKind::Class,
            section: class.section.clone(),
        });
    }

    for file in nav.files.iter().take(MAX_INDEXED_FILES) {
        plan.push(SampledPage {
            url: file.url.clone(),
            kind: PageKind::File,
            section: "files".to_string(),
        });
    }

    for module in nav.modules.iter().take(MAX_INDEXED_MODULES) {
        plan.push(SampledPage {
            url: module.url.clone(),
            kind: PageKind::Module,
            section: "modules".to_string(),
        });
    }

    plan
}
