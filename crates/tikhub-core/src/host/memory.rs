//! In-memory registrar

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use super::traits::{HostTool, ToolExecutor, ToolOutput, ToolRegistrar};

/// Registrar that keeps registered tools and can dispatch to them
///
/// Backs the Node.js binding, where JavaScript asks for the definitions and
/// then routes calls back by name.
#[derive(Debug, Default)]
pub struct MemoryRegistrar {
    tools: RwLock<Vec<HostTool>>,
}

impl MemoryRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered tools, in registration order
    pub fn tools(&self) -> Vec<HostTool> {
        self.tools.read().clone()
    }

    /// Registered tool names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.tools.read().iter().map(|t| t.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.read().is_empty()
    }

    /// Look up a tool by its host-visible name
    pub fn get(&self, name: &str) -> Option<HostTool> {
        self.tools.read().iter().find(|t| t.name == name).cloned()
    }

    /// Execute a tool by name; `None` if nothing is registered under it
    pub async fn execute(&self, name: &str, params: Value) -> Option<ToolOutput> {
        let executor: Arc<dyn ToolExecutor> = self.get(name)?.executor;
        Some(executor.execute(params).await)
    }
}

impl ToolRegistrar for MemoryRegistrar {
    fn register_tool(&self, tool: HostTool) {
        self.tools.write().push(tool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl ToolExecutor for Echo {
        async fn execute(&self, params: Value) -> ToolOutput {
            ToolOutput::json(params)
        }
    }

    fn tool(name: &str) -> HostTool {
        HostTool {
            name: name.to_string(),
            description: String::new(),
            parameters: json!({ "type": "object" }),
            executor: Arc::new(Echo),
        }
    }

    #[tokio::test]
    async fn test_register_and_execute() {
        let registrar = MemoryRegistrar::new();
        registrar.register_tool(tool("a"));
        registrar.register_tool(tool("b"));

        assert_eq!(registrar.names(), vec!["a", "b"]);

        let output = registrar.execute("b", json!({ "x": 1 })).await.unwrap();
        assert_eq!(output.details, json!({ "x": 1 }));
        assert!(registrar.execute("missing", json!({})).await.is_none());
    }

    #[test]
    fn test_output_envelope() {
        let output = ToolOutput::json(json!({ "total": 0 }));

        assert_eq!(output.text(), "{\n  \"total\": 0\n}");
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "content": [{ "type": "text", "text": "{\n  \"total\": 0\n}" }],
                "details": { "total": 0 }
            })
        );
    }
}
