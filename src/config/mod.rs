//! Configuration module for Doxscout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Configuration carries the default site address and the tool's
//! user-agent identity; freshness windows and sampling caps are fixed by
//! design and deliberately not configurable.
//!
//! # Example
//!
//! ```no_run
//! use doxscout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("doxscout.toml")).unwrap();
//! println!("Default site: {}", config.site.address);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_str};
