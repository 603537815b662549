//! Plugin configuration as supplied by the host

use std::fmt;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ConfigError, ConfigResult};

/// Default TikHub endpoint
pub const DEFAULT_BASE_URL: &str = "https://mcp.tikhub.io";

/// Default cap on the number of exposed tools
pub const DEFAULT_MAX_TOOLS: i64 = 100;

/// Environment variable consulted when no token is configured
pub const API_TOKEN_ENV: &str = "TIKHUB_API_TOKEN";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_tools() -> i64 {
    DEFAULT_MAX_TOOLS
}

/// Configuration for the TikHub bridge
///
/// Loaded once at startup and never mutated afterwards. Keys use the host's
/// camelCase convention (`apiToken`, `baseUrl`, `enabledCategories`, `maxTools`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Bearer token for the TikHub API (required)
    #[serde(default)]
    pub api_token: String,

    /// API base address
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Category keys or name prefixes to expose; empty exposes everything
    #[serde(default)]
    pub enabled_categories: Vec<String>,

    /// Maximum number of tools to expose; zero or negative means unlimited
    #[serde(default = "default_max_tools")]
    pub max_tools: i64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: default_base_url(),
            enabled_categories: Vec::new(),
            max_tools: DEFAULT_MAX_TOOLS,
        }
    }
}

impl fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginConfig")
            .field(
                "api_token",
                &if self.api_token.is_empty() { "<unset>" } else { "<redacted>" },
            )
            .field("base_url", &self.base_url)
            .field("enabled_categories", &self.enabled_categories)
            .field("max_tools", &self.max_tools)
            .finish()
    }
}

impl PluginConfig {
    /// Create a config with the given token and defaults for everything else
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    /// Parse the configuration object handed over by the host
    ///
    /// A `null` value is treated as an empty object so that validation, not
    /// parsing, reports the missing token.
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let value = if value.is_null() {
            Value::Object(Default::default())
        } else {
            value
        };
        Ok(serde_json::from_value(value)?)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the enabled categories
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enabled_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tool cap
    pub fn with_max_tools(mut self, max_tools: i64) -> Self {
        self.max_tools = max_tools;
        self
    }

    /// Fill a blank token from `TIKHUB_API_TOKEN`
    pub fn with_env_fallback(self) -> Self {
        self.with_token_fallback(std::env::var(API_TOKEN_ENV).ok())
    }

    fn with_token_fallback(mut self, token: Option<String>) -> Self {
        if self.api_token.trim().is_empty() {
            if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
                self.api_token = token;
            }
        }
        self
    }

    /// Check the invariants the rest of the plugin relies on
    pub fn validate(&self) -> ConfigResult<()> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingApiToken);
        }

        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Whether the category filter is active
    pub fn filters_categories(&self) -> bool {
        !self.enabled_categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let config = PluginConfig::from_value(json!({ "apiToken": "tok" })).unwrap();

        assert_eq!(config.api_token, "tok");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.enabled_categories.is_empty());
        assert_eq!(config.max_tools, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_host_object() {
        let config = PluginConfig::from_value(json!({
            "apiToken": "tok",
            "baseUrl": "http://localhost:8080",
            "enabledCategories": ["tiktok", "douyin"],
            "maxTools": 0
        }))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.enabled_categories, vec!["tiktok", "douyin"]);
        assert_eq!(config.max_tools, 0);
        assert!(config.filters_categories());
    }

    #[test]
    fn test_missing_token_rejected() {
        let config = PluginConfig::from_value(Value::Null).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiToken)));

        let blank = PluginConfig::new("   ");
        assert!(matches!(blank.validate(), Err(ConfigError::MissingApiToken)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = PluginConfig::new("tok").with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_wrong_type_is_serialization_error() {
        let result = PluginConfig::from_value(json!({ "apiToken": "tok", "maxTools": "ten" }));
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_token_fallback() {
        let filled = PluginConfig::default().with_token_fallback(Some("env-tok".to_string()));
        assert_eq!(filled.api_token, "env-tok");

        let kept = PluginConfig::new("host-tok").with_token_fallback(Some("env-tok".to_string()));
        assert_eq!(kept.api_token, "host-tok");

        let empty = PluginConfig::default().with_token_fallback(Some(String::new()));
        assert!(empty.api_token.is_empty());
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", PluginConfig::new("secret-token"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
