//! Configuration errors

/// Errors that can occur while loading or validating the plugin configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("apiToken is not configured")]
    MissingApiToken,

    #[error("Invalid baseUrl \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration object: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
