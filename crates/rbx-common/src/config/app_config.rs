//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub endpoints: EndpointConfig,
    pub http: HttpConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Base URLs of the three hosts the group APIs are spread over
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    /// Legacy API host: group metadata, allies, enemies
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Website API host: role sets
    #[serde(default = "default_web_api_base_url")]
    pub web_api_base_url: String,
    /// Groups v1 host: user memberships
    #[serde(default = "default_groups_base_url")]
    pub groups_base_url: String,
}

impl EndpointConfig {
    /// Point every host at the same base URL (mock servers, proxies)
    #[must_use]
    pub fn uniform(base_url: &str) -> Self {
        let base = trim_base_url(base_url);
        Self {
            api_base_url: base.clone(),
            web_api_base_url: base.clone(),
            groups_base_url: base,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            web_api_base_url: default_web_api_base_url(),
            groups_base_url: default_groups_base_url(),
        }
    }
}

/// HTTP transport settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: default_env(),
            },
            endpoints: EndpointConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "rbx-groups".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_api_base_url() -> String {
    "https://api.roblox.com".to_string()
}

fn default_web_api_base_url() -> String {
    "https://www.roblox.com/api".to_string()
}

fn default_groups_base_url() -> String {
    "https://groups.roblox.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("rbx-groups/{}", env!("CARGO_PKG_VERSION"))
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        let timeout_secs = match lookup("RBX_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue("RBX_HTTP_TIMEOUT_SECS", raw))?,
            None => default_timeout_secs(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            endpoints: EndpointConfig {
                api_base_url: lookup("RBX_API_BASE_URL")
                    .map_or_else(default_api_base_url, |s| trim_base_url(&s)),
                web_api_base_url: lookup("RBX_WEB_API_BASE_URL")
                    .map_or_else(default_web_api_base_url, |s| trim_base_url(&s)),
                groups_base_url: lookup("RBX_GROUPS_BASE_URL")
                    .map_or_else(default_groups_base_url, |s| trim_base_url(&s)),
            },
            http: HttpConfig {
                timeout_secs,
                user_agent: lookup("RBX_USER_AGENT").unwrap_or_else(default_user_agent),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
