use crate::config::types::Config;
use crate::config::validation::validate;
use crate::urljoin::strip_trailing_slash;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The site address is stripped of a trailing slash after parsing so that
/// page joining never produces a doubled slash.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_str(&content)
}

/// Parses a configuration from TOML text
pub fn load_config_str(content: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content)?;

    config.site.address = strip_trailing_slash(&config.site.address).to_string();

    validate(&config)?;

    Ok(config)
}
