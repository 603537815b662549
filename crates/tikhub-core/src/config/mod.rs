//! Plugin configuration
//!
//! Sources:
//! - Host object: `PluginConfig::from_value`
//! - YAML file: `FileConfigProvider`
//! - Environment: `PluginConfig::with_env_fallback` for the API token

mod error;
mod plugin;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use plugin::{PluginConfig, API_TOKEN_ENV, DEFAULT_BASE_URL, DEFAULT_MAX_TOOLS};
pub use file::FileConfigProvider;
