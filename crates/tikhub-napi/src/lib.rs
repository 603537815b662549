//! Node.js bindings for the TikHub bridge via napi-rs
//!
//! The host passes its plugin configuration as a JSON string and gets back a
//! `TikHubBridge` holding the registered tools. Parameters and results cross
//! the boundary as JSON strings.

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi::threadsafe_function::{ThreadsafeFunction, ThreadsafeFunctionCallMode};
use napi_derive::napi;
use serde_json::Value;
use std::sync::Arc;

use tikhub_core::host::{HostTool, MemoryRegistrar};
use tikhub_core::logging::{ConsoleLogger, LogLevel, Logger};
use tikhub_core::plugin::{activate, activate_per_tool, TikHubPlugin};

// ============================================================================
// Types
// ============================================================================

/// A registered tool as the host sees it
#[napi(object)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the parameters, as a JSON string
    pub parameters: String,
}

impl From<HostTool> for ToolDefinition {
    fn from(tool: HostTool) -> Self {
        Self {
            name: tool.name,
            description: tool.description,
            parameters: tool.parameters.to_string(),
        }
    }
}

/// Result of one tool execution
#[napi(object)]
pub struct ToolResponse {
    /// Text content shown to the agent
    pub text: String,
    /// Structured payload, as a JSON string
    pub details: String,
}

fn parse_json(label: &str, json: &str) -> Result<Value> {
    serde_json::from_str(json)
        .map_err(|e| Error::from_reason(format!("Invalid {} JSON: {}", label, e)))
}

/// One log line handed to the host's log callback
#[napi(object)]
pub struct LogRecord {
    /// `debug`, `info`, `warn` or `error`
    pub level: String,
    pub message: String,
}

impl LogRecord {
    fn new(level: LogLevel, message: &str) -> Self {
        Self {
            level: level.name().to_string(),
            message: message.to_string(),
        }
    }
}

/// Forwards plugin logs to a JavaScript callback
struct JsLogger {
    callback: ThreadsafeFunction<LogRecord>,
}

impl JsLogger {
    fn send(&self, level: LogLevel, message: &str) {
        self.callback.call(
            Ok(LogRecord::new(level, message)),
            ThreadsafeFunctionCallMode::NonBlocking,
        );
    }
}

impl Logger for JsLogger {
    fn debug(&self, message: &str) {
        self.send(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.send(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.send(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.send(LogLevel::Error, message);
    }
}

/// The host's callback if given, else the console
fn logger(callback: Option<ThreadsafeFunction<LogRecord>>) -> Arc<dyn Logger> {
    match callback {
        Some(callback) => Arc::new(JsLogger { callback }),
        None => Arc::new(ConsoleLogger::new()),
    }
}

// ============================================================================
// Bridge
// ============================================================================

#[napi]
pub struct TikHubBridge {
    registrar: Arc<MemoryRegistrar>,
    plugin: Option<Arc<TikHubPlugin>>,
}

impl TikHubBridge {
    fn new(registrar: Arc<MemoryRegistrar>, plugin: Option<TikHubPlugin>) -> Self {
        Self {
            registrar,
            plugin: plugin.map(Arc::new),
        }
    }
}

#[napi]
impl TikHubBridge {
    /// Load with the two generic tools; the catalog is fetched on first use
    ///
    /// Configuration problems are logged and yield an inactive bridge with no
    /// tools. Without `log`, lines go to the console.
    #[napi(factory)]
    pub fn generic(
        env: Env,
        config_json: String,
        #[napi(ts_arg_type = "(err: Error | null, record: LogRecord) => void")]
        log: Option<ThreadsafeFunction<LogRecord>>,
    ) -> Result<Self> {
        let config = parse_json("config", &config_json)?;
        let log = match log {
            Some(mut log) => {
                // logging alone must not keep the Node process alive
                log.unref(&env)?;
                Some(log)
            }
            None => None,
        };
        let registrar = Arc::new(MemoryRegistrar::new());
        let plugin = activate(config, logger(log), registrar.as_ref());
        Ok(Self::new(registrar, plugin))
    }

    /// Whether the plugin loaded and registered its tools
    #[napi(getter)]
    pub fn active(&self) -> bool {
        self.plugin.is_some()
    }

    /// Whether the remote catalog has been fetched yet
    #[napi(getter)]
    pub fn catalog_ready(&self) -> bool {
        self.plugin
            .as_ref()
            .map_or(false, |plugin| plugin.catalog().is_ready())
    }

    #[napi]
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registrar.tools().into_iter().map(Into::into).collect()
    }

    /// Execute a registered tool
    ///
    /// Remote failures come back inside `details`; only an unknown tool name
    /// or malformed params JSON rejects.
    #[napi]
    pub async fn execute(&self, name: String, params_json: Option<String>) -> Result<ToolResponse> {
        let params = match params_json {
            Some(json) => parse_json("params", &json)?,
            None => Value::Null,
        };

        let output = self
            .registrar
            .execute(&name, params)
            .await
            .ok_or_else(|| Error::from_reason(format!("Unknown tool: {}", name)))?;

        Ok(ToolResponse {
            text: output.text(),
            details: output.details.to_string(),
        })
    }
}

/// Load with one host tool per remote tool
///
/// The catalog is fetched before this resolves. A failed discovery is logged
/// and yields an inactive bridge with no tools. Without `log`, lines go to
/// the console; with it, the callback stays referenced while the bridge lives.
#[napi]
pub async fn load_per_tool(
    config_json: String,
    #[napi(ts_arg_type = "(err: Error | null, record: LogRecord) => void")]
    log: Option<ThreadsafeFunction<LogRecord>>,
) -> Result<TikHubBridge> {
    let config = parse_json("config", &config_json)?;
    let registrar = Arc::new(MemoryRegistrar::new());
    let plugin = activate_per_tool(config, logger(log), registrar.as_ref()).await;
    Ok(TikHubBridge::new(registrar, plugin))
}

