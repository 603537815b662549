//! File-based configuration (YAML)
//!
//! Lets the plugin run outside a host that passes configuration in, e.g. when
//! loaded from a standalone Node script. User-level path:
//! `~/.config/tikhub/config.yaml` (platform config dir).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::ConfigResult;
use super::plugin::PluginConfig;

/// YAML file configuration provider
///
/// # Example
///
/// ```no_run
/// use tikhub_core::config::FileConfigProvider;
///
/// let config = FileConfigProvider::user().load()?.with_env_fallback();
/// config.validate()?;
/// # Ok::<(), tikhub_core::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    /// Create a provider for a specific file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the user-level provider
    pub fn user() -> Self {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("tikhub").join("config.yaml"))
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the configuration; a missing file yields the defaults
    pub fn load(&self) -> ConfigResult<PluginConfig> {
        if !self.path.exists() {
            return Ok(PluginConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(PluginConfig::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Resolve the host-supplied configuration, falling back to this file
    ///
    /// The file is consulted only when the host passes nothing (`null` or an
    /// empty object) and the file exists.
    pub fn resolve(&self, host_config: Value) -> ConfigResult<PluginConfig> {
        let empty = match &host_config {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };

        if empty && self.exists() {
            self.load()
        } else {
            PluginConfig::from_value(host_config)
        }
    }

    /// Write a configuration to the file, creating parent directories
    pub fn save(&self, config: &PluginConfig) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_yaml::to_string(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert!(!provider.exists());
        assert_eq!(provider.load().unwrap(), PluginConfig::default());
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "apiToken: tok\nenabledCategories:\n  - xiaohongshu\n  - tiktok\nmaxTools: 20\n",
        )
        .unwrap();

        let config = FileConfigProvider::new(&path).load().unwrap();

        assert_eq!(config.api_token, "tok");
        assert_eq!(config.enabled_categories, vec!["xiaohongshu", "tiktok"]);
        assert_eq!(config.max_tools, 20);
        assert_eq!(config.base_url, "https://mcp.tikhub.io");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("nested").join("config.yaml"));
        let config = PluginConfig::new("tok").with_categories(["douyin"]).with_max_tools(-1);

        provider.save(&config).unwrap();

        assert!(provider.exists());
        assert_eq!(provider.load().unwrap(), config);
    }

    #[test]
    fn test_resolve_prefers_host_config() {
        let dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));
        provider.save(&PluginConfig::new("file-token")).unwrap();

        let from_host = provider.resolve(serde_json::json!({ "apiToken": "host-token" })).unwrap();
        let from_file = provider.resolve(Value::Null).unwrap();
        let from_empty = provider.resolve(serde_json::json!({})).unwrap();

        assert_eq!(from_host.api_token, "host-token");
        assert_eq!(from_file.api_token, "file-token");
        assert_eq!(from_empty.api_token, "file-token");
    }

    #[test]
    fn test_resolve_without_file() {
        let dir = TempDir::new().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("config.yaml"));

        assert_eq!(provider.resolve(Value::Null).unwrap(), PluginConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "maxTools: [unterminated").unwrap();

        assert!(matches!(
            FileConfigProvider::new(&path).load(),
            Err(ConfigError::Yaml(_))
        ));
    }
}
