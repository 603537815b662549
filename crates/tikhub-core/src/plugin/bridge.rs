//! Plugin entry points and tool registration
//!
//! Two registration shapes:
//! - Generic (default): two tools registered synchronously, catalog fetched on
//!   first use. Fits hosts that require registration to finish during load.
//! - Per-tool: the catalog is fetched eagerly and each remote tool becomes its
//!   own `tikhub_`-prefixed host tool.

use std::sync::Arc;

use serde_json::{json, Value};

use super::error::{PluginError, PluginResult};
use super::guard::GuardedExecutor;
use super::handlers::{
    CallToolHandler, ListToolsHandler, ProxyToolHandler, CALL_TOOL_NAME, LIST_TOOLS_NAME,
};
use crate::catalog::{ToolCatalog, ToolFilter};
use crate::client::{HttpClient, TikHubApi};
use crate::config::{FileConfigProvider, PluginConfig};
use crate::host::{HostTool, ToolRegistrar};
use crate::logging::Logger;
use crate::types::ToolDescriptor;
use crate::{log_error, log_info};

/// Namespace prefix for host-visible tool names
pub const TOOL_PREFIX: &str = "tikhub_";

/// Prefix added to remote descriptions
pub const DESCRIPTION_PREFIX: &str = "[TikHub] ";

/// How remote tools are exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationMode {
    /// `tikhub_list_tools` + `tikhub_call_tool`, lazy catalog
    #[default]
    Generic,
    /// One host tool per remote tool, eager catalog
    PerTool,
}

/// Host-visible name for a remote tool
pub fn host_tool_name(remote_name: &str) -> String {
    format!("{}{}", TOOL_PREFIX, remote_name)
}

/// Parameter schema of `tikhub_list_tools`
pub fn list_tools_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "category": {
                "type": "string",
                "description": "Only list tools in this category, e.g. xiaohongshu, tiktok, douyin"
            }
        }
    })
}

/// Parameter schema of `tikhub_call_tool`
pub fn call_tool_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "tool_name": {
                "type": "string",
                "description": "Name of the TikHub tool, as returned by tikhub_list_tools"
            },
            "arguments": {
                "type": "object",
                "description": "Arguments passed to the tool",
                "additionalProperties": true
            }
        },
        "required": ["tool_name"]
    })
}

/// Permissive schema used for every per-tool registration
pub fn proxy_tool_schema() -> Value {
    json!({
        "type": "object",
        "description": "Arguments passed to the TikHub API (see the tool description or TikHub docs)",
        "additionalProperties": true
    })
}

/// The loaded plugin: configuration, API access and the shared catalog
pub struct TikHubPlugin {
    config: PluginConfig,
    api: Arc<dyn TikHubApi>,
    catalog: Arc<ToolCatalog>,
    logger: Arc<dyn Logger>,
}

impl TikHubPlugin {
    /// Validate the configuration and build an HTTP-backed plugin
    pub fn new(config: PluginConfig, logger: Arc<dyn Logger>) -> PluginResult<Self> {
        config.validate()?;
        let api = HttpClient::from_config(&config, Arc::clone(&logger))?;
        Ok(Self::with_api(config, Arc::new(api), logger))
    }

    /// Build a plugin over any API implementation
    pub fn with_api(config: PluginConfig, api: Arc<dyn TikHubApi>, logger: Arc<dyn Logger>) -> Self {
        let catalog = Arc::new(ToolCatalog::new(
            Arc::clone(&api),
            ToolFilter::from_config(&config),
            Arc::clone(&logger),
        ));

        Self {
            config,
            api,
            catalog,
            logger,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<ToolCatalog> {
        &self.catalog
    }

    /// Register the two generic tools; never touches the network
    pub fn register_generic(&self, registrar: &dyn ToolRegistrar) {
        registrar.register_tool(HostTool {
            name: LIST_TOOLS_NAME.to_string(),
            description: format!(
                "{}List available social media data tools (Xiaohongshu, TikTok, Douyin, Instagram, YouTube, Twitter/X, Weibo and more), grouped by platform",
                DESCRIPTION_PREFIX
            ),
            parameters: list_tools_schema(),
            executor: GuardedExecutor::shared(
                ListToolsHandler::new(Arc::clone(&self.catalog)),
                Arc::clone(&self.logger),
            ),
        });

        registrar.register_tool(HostTool {
            name: CALL_TOOL_NAME.to_string(),
            description: format!(
                "{}Call a TikHub tool by name. Use {} first to discover tool names",
                DESCRIPTION_PREFIX, LIST_TOOLS_NAME
            ),
            parameters: call_tool_schema(),
            executor: GuardedExecutor::shared(
                CallToolHandler::new(Arc::clone(&self.api), Arc::clone(&self.logger)),
                Arc::clone(&self.logger),
            ),
        });

        log_info!(
            self.logger,
            "Registered generic tools: {}, {}",
            LIST_TOOLS_NAME,
            CALL_TOOL_NAME
        );
    }

    /// Fetch the catalog and register one host tool per remote tool
    ///
    /// Returns the number of tools registered. If discovery fails nothing is
    /// registered.
    pub async fn register_per_tool(&self, registrar: &dyn ToolRegistrar) -> PluginResult<usize> {
        let tools = self.catalog.get_tools().await?;

        for tool in tools {
            registrar.register_tool(self.proxy_tool(tool));
        }

        log_info!(self.logger, "Registered {} tools", tools.len());
        Ok(tools.len())
    }

    fn proxy_tool(&self, tool: &ToolDescriptor) -> HostTool {
        let name = host_tool_name(&tool.name);
        let handler = ProxyToolHandler::new(
            name.clone(),
            tool.name.clone(),
            Arc::clone(&self.api),
            Arc::clone(&self.logger),
        );

        HostTool {
            name,
            description: format!("{}{}", DESCRIPTION_PREFIX, tool.description),
            parameters: proxy_tool_schema(),
            executor: GuardedExecutor::shared(handler, Arc::clone(&self.logger)),
        }
    }
}

/// Resolve config (host object, else the user's YAML file) and build the plugin
fn load(
    host_config: Value,
    file: &FileConfigProvider,
    logger: &Arc<dyn Logger>,
) -> Option<TikHubPlugin> {
    let plugin = file
        .resolve(host_config)
        .map_err(PluginError::from)
        .and_then(|config| TikHubPlugin::new(config.with_env_fallback(), Arc::clone(logger)));

    match plugin {
        Ok(plugin) => Some(plugin),
        Err(e) => {
            log_error!(logger, "Plugin cannot start: {}", e);
            None
        }
    }
}

/// Load the plugin and register the generic tools
///
/// Configuration problems are logged and leave the host without any TikHub
/// tools; they are never raised to the host.
pub fn activate(
    host_config: Value,
    logger: Arc<dyn Logger>,
    registrar: &dyn ToolRegistrar,
) -> Option<TikHubPlugin> {
    let plugin = load(host_config, &FileConfigProvider::user(), &logger)?;
    log_info!(logger, "Connecting to TikHub API...");
    plugin.register_generic(registrar);
    log_info!(logger, "Plugin loaded");
    Some(plugin)
}

/// Load the plugin, fetch the catalog and register one tool per remote tool
///
/// A failed discovery aborts the load: it is logged and nothing is registered.
pub async fn activate_per_tool(
    host_config: Value,
    logger: Arc<dyn Logger>,
    registrar: &dyn ToolRegistrar,
) -> Option<TikHubPlugin> {
    let plugin = load(host_config, &FileConfigProvider::user(), &logger)?;
    log_info!(logger, "Connecting to TikHub API...");

    if let Err(e) = plugin.register_per_tool(registrar).await {
        log_error!(logger, "Plugin load aborted: {}", e);
        return None;
    }

    log_info!(logger, "Plugin loaded");
    Some(plugin)
}

/// Load the plugin with the given registration mode
pub async fn activate_with_mode(
    mode: RegistrationMode,
    host_config: Value,
    logger: Arc<dyn Logger>,
    registrar: &dyn ToolRegistrar,
) -> Option<TikHubPlugin> {
    match mode {
        RegistrationMode::Generic => activate(host_config, logger, registrar),
        RegistrationMode::PerTool => activate_per_tool(host_config, logger, registrar).await,
    }
}
