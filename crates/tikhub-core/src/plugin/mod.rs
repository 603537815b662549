//! Registration adapter between the TikHub catalog and the host runtime
//!
//! Every executor handed to the host is a `GuardedExecutor`: failures come
//! back as `{ "success": false, "error": ... }` (or `{ "error": ... }` for the
//! listing tool) instead of propagating.

mod error;
mod guard;
mod handlers;
mod bridge;

pub use error::{PluginError, PluginResult};
pub use guard::{GuardedExecutor, ToolHandler};
pub use handlers::{
    CallToolHandler, ListToolsHandler, ProxyToolHandler, CALL_TOOL_NAME, LIST_TOOLS_NAME,
};
pub use bridge::{
    activate, activate_per_tool, activate_with_mode, call_tool_schema, host_tool_name,
    list_tools_schema, proxy_tool_schema, RegistrationMode, TikHubPlugin, DESCRIPTION_PREFIX,
    TOOL_PREFIX,
};
