use crate::config::types::{Config, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_address(&config.site.address)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates the site address
///
/// An empty address is accepted here: the CLI may supply one at runtime,
/// and library callers pass site addresses per call.
fn validate_site_address(address: &str) -> Result<(), ConfigError> {
    if address.is_empty() {
        return Ok(());
    }

    let parsed = Url::parse(address)
        .map_err(|e| ConfigError::InvalidSite(format!("{}: {}", address, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidSite(format!(
            "site address must use http or https, got {}",
            parsed.scheme()
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.tool_name.is_empty() {
        return Err(ConfigError::Validation(
            "tool-name cannot be empty".to_string(),
        ));
    }

    if !config
        .tool_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "tool-name must be alphanumeric with hyphens, got '{}'",
            config.tool_name
        )));
    }

    if config.tool_version.is_empty() {
        return Err(ConfigError::Validation(
            "tool-version cannot be empty".to_string(),
        ));
    }

    if Url::parse(&config.contact_url).is_err() {
        return Err(ConfigError::Validation(format!(
            "contact-url is not a valid URL: {}",
            config.contact_url
        )));
    }

    if !config.contact_email.contains('@') {
        return Err(ConfigError::Validation(format!(
            "contact-email does not look like an email address: {}",
            config.contact_email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::SiteConfig;

    fn valid_config() -> Config {
        Config {
            site: SiteConfig {
                address: "https://docs.example.com".to_string(),
            },
            user_agent: UserAgentConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_site_allowed() {
        let mut config = valid_config();
        config.site.address = String::new();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = valid_config();
        config.site.address = "file:///tmp/docs".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSite(_))
        ));
    }

    #[test]
    fn test_empty_tool_name_rejected() {
        let mut config = valid_config();
        config.user_agent.tool_name = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_tool_name_with_spaces_rejected() {
        let mut config = valid_config();
        config.user_agent.tool_name = "Dox scout".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_contact_email_rejected() {
        let mut config = valid_config();
        config.user_agent.contact_email = "not-an-email".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
