//! HTTP fetching with a short-lived page cache
//!
//! All network I/O for the engine goes through [`PageFetcher`]. Bodies are
//! memoized by exact URL string: trailing slashes, query strings and case
//! are significant, so callers must pass canonical URLs. No per-call
//! timeout or retry happens at this layer; timeout behavior is the
//! caller's responsibility.

use crate::config::UserAgentConfig;
use crate::{FetchError, FetchResult};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use std::collections::HashMap;

/// How long a fetched page body stays fresh
const PAGE_FRESHNESS_MINUTES: i64 = 5;

/// A cached page body with its fetch timestamp
#[derive(Debug, Clone)]
pub struct CachedPage {
    /// The page body
    pub body: String,

    /// When the body was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CachedPage {
    /// Creates a new cache entry with the current timestamp
    pub fn new(body: String) -> Self {
        Self {
            body,
            fetched_at: Utc::now(),
        }
    }

    /// Checks if the entry is past the freshness window
    pub fn is_stale(&self) -> bool {
        let age = Utc::now() - self.fetched_at;
        age > Duration::minutes(PAGE_FRESHNESS_MINUTES)
    }
}

/// Builds an HTTP client with a descriptive user agent
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: ToolName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.tool_name, config.tool_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches page bodies, memoizing them by exact URL string
pub struct PageFetcher {
    client: Client,
    cache: HashMap<String, CachedPage>,
}

impl PageFetcher {
    /// Creates a fetcher around an already-built HTTP client
    pub fn new(client: Client) -> Self {
        Self {
            client,
            cache: HashMap::new(),
        }
    }

    /// Returns a page body, from cache when fresh
    ///
    /// On a miss or an expired entry, issues a GET and stores the body
    /// with the current time before returning it.
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL to fetch (used verbatim as the cache key)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The page body
    /// * `Err(FetchError)` - Non-success status or transport failure
    pub async fn fetch(&mut self, url: &str) -> FetchResult<String> {
        if let Some(cached) = self.cache.get(url) {
            if !cached.is_stale() {
                tracing::trace!("Cache hit for {}", url);
                return Ok(cached.body.clone());
            }
        }

        tracing::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        self.cache.insert(url.to_string(), CachedPage::new(body.clone()));

        Ok(body)
    }

    /// Number of cached entries
    pub fn cached_pages(&self) -> usize {
        self.cache.len()
    }

    /// Drops every cached entry
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Backdates one cache entry, for staleness tests
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, url: &str, minutes: i64) {
        if let Some(entry) = self.cache.get_mut(url) {
            entry.fetched_at = Utc::now() - Duration::minutes(minutes);
        }
    }
}
