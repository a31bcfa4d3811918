//! Doxscout: structured access to generated class-reference documentation
//!
//! This crate crawls a documentation site produced by a standard generator
//! (Doxygen-style markup), extracts typed records for classes, methods,
//! properties, modules, files and free functions, builds a bounded search
//! index over a sample of pages, and answers ranked full-text queries
//! against that index.

pub mod config;
pub mod engine;
pub mod extract;
pub mod index;
pub mod model;
pub mod urljoin;

use thiserror::Error;

/// Main error type for Doxscout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when a page cannot be retrieved
///
/// A non-success HTTP response and a transport failure are the only two
/// shapes; both carry a human-readable cause. Fetch errors are propagated
/// to the immediate caller and never retried automatically.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} {reason} for {url}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    /// Builds a FetchError from a failed reqwest call
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid site address in config: {0}")]
    InvalidSite(String),
}

/// Result type alias for Doxscout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use engine::DocsEngine;
pub use model::{
    ClassDetails, ClassInfo, NavigationStructure, PageRecord, Partial, SearchIndex, SearchResult,
};
