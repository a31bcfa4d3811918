use serde::Deserialize;

/// Main configuration structure for Doxscout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

impl Config {
    /// Builds a configuration for one site address with default identity
    pub fn for_site(address: &str) -> Self {
        Self {
            site: SiteConfig {
                address: crate::urljoin::strip_trailing_slash(address).to_string(),
            },
            user_agent: UserAgentConfig::default(),
        }
    }
}

/// The documentation site the engine points at by default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Root address under which the generated pages live (no trailing slash)
    #[serde(default)]
    pub address: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the tool
    #[serde(rename = "tool-name")]
    pub tool_name: String,

    /// Version of the tool
    #[serde(rename = "tool-version")]
    pub tool_version: String,

    /// URL with information about the tool
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            tool_name: "Doxscout".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/doxscout/doxscout".to_string(),
            contact_email: "docs@doxscout.dev".to_string(),
        }
    }
}
