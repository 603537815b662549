//! Handlers behind the registered tools

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::error::{PluginError, PluginResult};
use super::guard::ToolHandler;
use crate::catalog::ToolCatalog;
use crate::client::TikHubApi;
use crate::log_info;
use crate::logging::Logger;
use crate::types::InvocationResult;

/// Name of the generic listing tool
pub const LIST_TOOLS_NAME: &str = "tikhub_list_tools";

/// Name of the generic invocation tool
pub const CALL_TOOL_NAME: &str = "tikhub_call_tool";

const USAGE_HINT: &str =
    "Call tikhub_call_tool with tool_name set to one of the listed names and arguments as an object";

/// Forward one invocation and shape the result for the host
async fn invoke(
    api: &dyn TikHubApi,
    logger: &dyn Logger,
    tool_name: &str,
    arguments: Value,
) -> PluginResult<Value> {
    log_info!(logger, "Calling tool: {}", tool_name);
    let response = api.call_tool(tool_name, arguments).await?;
    Ok(InvocationResult::from(response).to_json())
}

fn invocation_failure(message: String) -> Value {
    InvocationResult::failure(message).to_json()
}

/// `tikhub_list_tools(category?)`
pub struct ListToolsHandler {
    catalog: Arc<ToolCatalog>,
}

impl ListToolsHandler {
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ToolHandler for ListToolsHandler {
    fn name(&self) -> &str {
        LIST_TOOLS_NAME
    }

    async fn handle(&self, params: Value) -> PluginResult<Value> {
        let category = match params.get("category") {
            None | Some(Value::Null) => None,
            Some(Value::String(c)) if c.trim().is_empty() => None,
            Some(Value::String(c)) => Some(c.trim()),
            Some(_) => return Err(PluginError::invalid_arguments("category must be a string")),
        };

        let summary = self.catalog.summary(category).await?.with_usage(USAGE_HINT);
        Ok(summary.to_json())
    }
}

/// `tikhub_call_tool(tool_name, arguments?)`
pub struct CallToolHandler {
    api: Arc<dyn TikHubApi>,
    logger: Arc<dyn Logger>,
}

impl CallToolHandler {
    pub fn new(api: Arc<dyn TikHubApi>, logger: Arc<dyn Logger>) -> Self {
        Self { api, logger }
    }
}

#[async_trait]
impl ToolHandler for CallToolHandler {
    fn name(&self) -> &str {
        CALL_TOOL_NAME
    }

    async fn handle(&self, params: Value) -> PluginResult<Value> {
        let tool_name = params
            .get("tool_name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| PluginError::invalid_arguments("tool_name is required"))?;

        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => json!({}),
            Some(arguments @ Value::Object(_)) => arguments.clone(),
            Some(_) => return Err(PluginError::invalid_arguments("arguments must be an object")),
        };

        invoke(self.api.as_ref(), self.logger.as_ref(), tool_name, arguments).await
    }

    fn failure(&self, message: String) -> Value {
        invocation_failure(message)
    }
}

/// Handler behind one per-tool registration; params are the arguments
pub struct ProxyToolHandler {
    host_name: String,
    remote_name: String,
    api: Arc<dyn TikHubApi>,
    logger: Arc<dyn Logger>,
}

impl ProxyToolHandler {
    pub fn new(
        host_name: impl Into<String>,
        remote_name: impl Into<String>,
        api: Arc<dyn TikHubApi>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            host_name: host_name.into(),
            remote_name: remote_name.into(),
            api,
            logger,
        }
    }
}

#[async_trait]
impl ToolHandler for ProxyToolHandler {
    fn name(&self) -> &str {
        &self.host_name
    }

    async fn handle(&self, params: Value) -> PluginResult<Value> {
        let arguments = if params.is_null() { json!({}) } else { params };
        invoke(self.api.as_ref(), self.logger.as_ref(), &self.remote_name, arguments).await
    }

    fn failure(&self, message: String) -> Value {
        invocation_failure(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolFilter;
    use crate::client::{MockApi, MockCallMode};
    use crate::logging::NoOpLogger;

    fn logger() -> Arc<dyn Logger> {
        Arc::new(NoOpLogger::new())
    }

    #[tokio::test]
    async fn test_call_requires_tool_name() {
        let api = Arc::new(MockApi::default());
        let handler = CallToolHandler::new(api.clone(), logger());

        for params in [json!({}), json!({ "tool_name": "  " }), json!({ "tool_name": 5 })] {
            let err = handler.handle(params).await.unwrap_err();
            assert!(matches!(err, PluginError::InvalidArguments(_)));
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_call_rejects_non_object_arguments() {
        let handler = CallToolHandler::new(Arc::new(MockApi::default()), logger());

        let err = handler
            .handle(json!({ "tool_name": "tiktok_user", "arguments": [1, 2] }))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid arguments: arguments must be an object");
    }

    #[tokio::test]
    async fn test_call_defaults_arguments() {
        let api = Arc::new(MockApi::default());
        let handler = CallToolHandler::new(api.clone(), logger());

        handler.handle(json!({ "tool_name": "health_check" })).await.unwrap();

        assert_eq!(api.calls()[0].arguments, json!({}));
    }

    #[tokio::test]
    async fn test_proxy_forwards_remote_name() {
        let api = Arc::new(MockApi::default().with_call_mode(MockCallMode::Fixed(json!({ "ok": 1 }))));
        let handler = ProxyToolHandler::new("tikhub_weibo_search", "weibo_search", api.clone(), logger());

        let value = handler.handle(json!({ "keyword": "rust" })).await.unwrap();

        assert_eq!(value, json!({ "ok": 1 }));
        assert_eq!(api.calls()[0].tool_name, "weibo_search");
        assert_eq!(handler.name(), "tikhub_weibo_search");
    }

    #[tokio::test]
    async fn test_list_rejects_non_string_category() {
        let catalog = Arc::new(ToolCatalog::new(
            Arc::new(MockApi::default()),
            ToolFilter::new(),
            logger(),
        ));
        let handler = ListToolsHandler::new(catalog);

        let err = handler.handle(json!({ "category": 3 })).await.unwrap_err();

        assert!(matches!(err, PluginError::InvalidArguments(_)));
    }
}
