//! The crawling engine: caches, aggregation, and the boundary API
//!
//! [`DocsEngine`] owns the two cache maps (page bodies and search
//! indexes) and exposes the operations the surrounding tool layer
//! consumes. One engine instance serves one caller at a time: methods
//! take `&mut self`, encoding the single-consumer-per-call model instead
//! of relying on locks. Independent engine instances share nothing.

mod fetcher;

pub use fetcher::{build_http_client, CachedPage, PageFetcher};

use crate::config::Config;
use crate::extract::classes::{extract_class_entries, CLASS_LISTING_PAGES};
use crate::extract::detail::{extract_class_details, find_class};
use crate::extract::functions::{extract_first_function, function_page_links};
use crate::extract::listing::{extract_files, extract_modules};
use crate::extract::navigation::extract_related_pages;
use crate::extract::text::page_text;
use crate::index::{build_index, search_index};
use crate::model::{
    ClassDetails, ClassInfo, FileInfo, FunctionInfo, ModuleInfo, NavigationStructure, Partial,
    SearchIndex, SearchResult,
};
use crate::urljoin::join_page;
use crate::{FetchError, FetchResult, ScoutError};
use scraper::Html;
use std::collections::{HashMap, HashSet};

/// The engine instance owning both caches
pub struct DocsEngine {
    fetcher: PageFetcher,
    indexes: HashMap<String, SearchIndex>,
}

impl DocsEngine {
    /// Creates an engine from a configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the user-agent identity for the HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(DocsEngine)` - Ready engine with empty caches
    /// * `Err(ScoutError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, ScoutError> {
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            fetcher: PageFetcher::new(client),
            indexes: HashMap::new(),
        })
    }

    /// Fetches one page body, going through the page cache
    pub async fn fetch_raw_page(&mut self, url: &str) -> FetchResult<String> {
        self.fetcher.fetch(url).await
    }

    /// Builds the consolidated navigation structure for a site
    ///
    /// The main-page scan always runs and its failure propagates; the
    /// modules, classes and files sub-extractions each fail soft into
    /// the warning list.
    pub async fn navigation_structure(
        &mut self,
        site: &str,
    ) -> FetchResult<Partial<NavigationStructure>> {
        let main_page = join_page(site, "index.html");
        let body = self.fetcher.fetch(&main_page).await?;
        let document = Html::parse_document(&body);

        let mut nav = Partial::clean(NavigationStructure {
            main_page,
            related_pages: extract_related_pages(&document, site),
            modules: Vec::new(),
            classes: Vec::new(),
            files: Vec::new(),
        });

        match self.modules(site).await {
            Ok(modules) => nav.value.modules = modules,
            Err(e) => {
                tracing::warn!("Module listing skipped for {}: {}", site, e);
                nav.warn(format!("module listing skipped: {}", e));
            }
        }

        let classes = self.list_classes(site).await;
        nav.value.classes = classes.value;
        nav.warnings.extend(classes.warnings);

        match self.files(site).await {
            Ok(files) => nav.value.files = files,
            Err(e) => {
                tracing::warn!("File listing skipped for {}: {}", site, e);
                nav.warn(format!("file listing skipped: {}", e));
            }
        }

        Ok(nav)
    }

    /// Lists classes found on the conventional listing pages
    ///
    /// Never fails: an empty site address yields an empty result
    /// immediately, and a listing page that cannot be fetched becomes a
    /// warning while the remaining pages are still processed. Names are
    /// unique within one invocation; first occurrence wins.
    pub async fn list_classes(&mut self, site: &str) -> Partial<Vec<ClassInfo>> {
        if site.is_empty() {
            return Partial::clean(Vec::new());
        }

        let mut result = Partial::clean(Vec::new());
        let mut seen = HashSet::new();

        for page in CLASS_LISTING_PAGES {
            let section = page.trim_end_matches(".html");
            let url = join_page(site, page);

            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Class listing {} skipped: {}", url, e);
                    result.warn(format!("listing {} skipped: {}", page, e));
                    continue;
                }
            };

            let document = Html::parse_document(&body);
            result
                .value
                .extend(extract_class_entries(&document, site, section, &mut seen));
        }

        result
    }

    /// Returns full details for one class, or None when nothing matches
    ///
    /// The name is matched against the current class listing exactly,
    /// then case-insensitively, then by substring. A matched class whose
    /// page cannot be fetched is an error; a missing match is not.
    pub async fn class_details(
        &mut self,
        site: &str,
        name: &str,
    ) -> FetchResult<Option<ClassDetails>> {
        let listing = self.list_classes(site).await;

        let Some(class) = find_class(&listing.value, name).cloned() else {
            tracing::debug!("No class matching '{}' on {}", name, site);
            return Ok(None);
        };

        let body = self.fetcher.fetch(&class.url).await?;
        let document = Html::parse_document(&body);

        Ok(Some(extract_class_details(&document, class)))
    }

    /// Lists free functions reachable from the main page
    ///
    /// An unreachable main page is a hard failure; an individual
    /// function sub-page failing is a warning and the page is skipped.
    pub async fn list_functions(&mut self, site: &str) -> FetchResult<Partial<Vec<FunctionInfo>>> {
        let main_page = join_page(site, "index.html");
        let body = self.fetcher.fetch(&main_page).await?;
        let document = Html::parse_document(&body);
        let links = function_page_links(&document, site);

        let mut result = Partial::clean(Vec::new());

        for url in links {
            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Function page {} skipped: {}", url, e);
                    result.warn(format!("function page skipped: {}", e));
                    continue;
                }
            };

            let page = Html::parse_document(&body);
            if let Some(function) = extract_first_function(&page, &url) {
                result.value.push(function);
            }
        }

        Ok(result)
    }

    /// Returns a page reduced to plain text
    ///
    /// `page` may be a path relative to the site or an absolute URL.
    pub async fn page_content(&mut self, site: &str, page: &str) -> FetchResult<String> {
        let url = join_page(site, page);
        let body = self.fetcher.fetch(&url).await?;
        let document = Html::parse_document(&body);
        Ok(page_text(&document))
    }

    /// Runs a ranked full-text query against the site's index
    ///
    /// An empty query or a zero result limit short-circuits to an empty
    /// result without touching the index. Otherwise the cached index is
    /// used when fresh and rebuilt when missing or stale; only a rebuild
    /// whose main page is unreachable fails.
    pub async fn search(
        &mut self,
        site: &str,
        query: &str,
        max_results: usize,
    ) -> FetchResult<Vec<SearchResult>> {
        if query.is_empty() || max_results == 0 {
            return Ok(Vec::new());
        }

        let index = self.ensure_index(site).await?;
        Ok(search_index(index, query, max_results))
    }

    /// Returns the cached index for a site, rebuilding it when needed
    async fn ensure_index(&mut self, site: &str) -> FetchResult<&SearchIndex> {
        let needs_rebuild = match self.indexes.get(site) {
            Some(index) => index.is_stale(),
            None => true,
        };

        if needs_rebuild {
            tracing::info!("Building search index for {}", site);
            let nav = self.navigation_structure(site).await?;
            let built = build_index(&mut self.fetcher, site, &nav.value).await;
            for warning in &built.warnings {
                tracing::warn!("Index build: {}", warning);
            }
            self.indexes.insert(site.to_string(), built.value);
        }

        match self.indexes.get(site) {
            Some(index) => Ok(index),
            // Unreachable after the insert above; propagate rather than panic
            None => Err(FetchError::Network {
                url: site.to_string(),
                message: "search index unavailable after rebuild".to_string(),
            }),
        }
    }

    /// Clears both cache maps; safe to call repeatedly
    pub fn teardown(&mut self) {
        self.fetcher.clear();
        self.indexes.clear();
    }

    /// Number of pages currently held by the fetch cache
    pub fn cached_pages(&self) -> usize {
        self.fetcher.cached_pages()
    }

    /// Number of sites with a built index
    pub fn cached_indexes(&self) -> usize {
        self.indexes.len()
    }

    /// Fetches the module listing; an absent page is an empty result
    async fn modules(&mut self, site: &str) -> FetchResult<Vec<ModuleInfo>> {
        let url = join_page(site, "modules.html");
        match self.fetcher.fetch(&url).await {
            Ok(body) => {
                let document = Html::parse_document(&body);
                Ok(extract_modules(&document, site))
            }
            Err(FetchError::Status { .. }) => {
                tracing::debug!("No module listing at {}", url);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches the file listing; an absent page is an empty result
    async fn files(&mut self, site: &str) -> FetchResult<Vec<FileInfo>> {
        let url = join_page(site, "files.html");
        match self.fetcher.fetch(&url).await {
            Ok(body) => {
                let document = Html::parse_document(&body);
                Ok(extract_files(&document, site))
            }
            Err(FetchError::Status { .. }) => {
                tracing::debug!("No file listing at {}", url);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
