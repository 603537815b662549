//! Host runtime seam: tool registration and execution

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text block inside a tool output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Presentation envelope the host expects back from every executor
///
/// `content` is what the agent reads; `details` keeps the structured payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<ToolContent>,
    pub details: Value,
}

impl ToolOutput {
    /// Wrap a JSON payload, rendering it as pretty-printed text
    pub fn json(details: Value) -> Self {
        let text = serde_json::to_string_pretty(&details).unwrap_or_else(|_| details.to_string());
        Self {
            content: vec![ToolContent::Text { text }],
            details,
        }
    }

    /// Concatenated text content
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                ToolContent::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Executes a registered tool
///
/// Executors never fail: errors are reported inside the returned output.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, params: Value) -> ToolOutput;
}

/// A tool as registered with the host
#[derive(Clone)]
pub struct HostTool {
    /// Host-visible name
    pub name: String,
    /// Description shown to the agent
    pub description: String,
    /// JSON schema for the parameters
    pub parameters: Value,
    /// Invoked with caller-supplied parameters
    pub executor: Arc<dyn ToolExecutor>,
}

impl fmt::Debug for HostTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// The host's registration call
///
/// Registration is synchronous: it must complete during plugin loading, before
/// any network round-trip could finish.
pub trait ToolRegistrar: Send + Sync {
    fn register_tool(&self, tool: HostTool);
}
