//! Plugin-level errors

use thiserror::Error;

use crate::client::TikHubError;
use crate::config::ConfigError;

/// Errors raised while loading the plugin or handling a tool call
#[derive(Error, Debug)]
pub enum PluginError {
    /// The configuration is unusable; the plugin does not start
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Discovery or invocation against the TikHub API failed
    #[error(transparent)]
    Remote(#[from] TikHubError),

    /// The caller passed parameters the tool cannot use
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl PluginError {
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }
}

pub type PluginResult<T> = Result<T, PluginError>;
