//! TikHub Core
//!
//! Bridge between the TikHub remote tool API and an agent host runtime.
//! This crate is host-agnostic; bindings (napi-rs for Node.js hosts) sit on
//! top of the `host` traits.
//!
//! ## Tool Bridging
//!
//! - Discover the remote catalog with `GET /tools`, filter it by category and
//!   count, memoize the result
//! - Register either two generic tools (`tikhub_list_tools`,
//!   `tikhub_call_tool`) or one `tikhub_`-prefixed tool per remote tool
//! - Proxy invocations through `POST /tools/call` and unwrap the `result`
//!   envelope
//!
//! ```rust,ignore
//! use tikhub_core::{activate, ConsoleLogger, MemoryRegistrar};
//!
//! let registrar = MemoryRegistrar::new();
//! let plugin = activate(host_config, Arc::new(ConsoleLogger::new()), &registrar);
//!
//! let output = registrar
//!     .execute("tikhub_list_tools", json!({ "category": "tiktok" }))
//!     .await;
//! ```

pub mod types;
pub mod logging;
pub mod config;
pub mod client;
pub mod catalog;
pub mod host;
pub mod plugin;

// Re-export commonly used types
pub use types::{
    InvocationResult, ResultEnvelope, ToolCallRequest, ToolCallResponse, ToolDescriptor,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{ConfigError, ConfigResult, FileConfigProvider, PluginConfig};

pub use client::{HttpClient, MockApi, TikHubApi, TikHubError, TikHubResult};

pub use catalog::{CatalogSummary, ToolCatalog, ToolFilter};

pub use host::{HostTool, MemoryRegistrar, ToolExecutor, ToolOutput, ToolRegistrar};

pub use plugin::{
    activate, activate_per_tool, activate_with_mode, PluginError, PluginResult,
    RegistrationMode, TikHubPlugin,
};
