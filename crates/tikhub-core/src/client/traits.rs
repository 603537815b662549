//! Remote API trait

use async_trait::async_trait;
use serde_json::Value;

use super::error::TikHubResult;
use crate::types::{ToolCallResponse, ToolDescriptor};

/// Access to the TikHub tool endpoints
///
/// Implemented by `HttpClient` for the real service and by `MockApi` for
/// tests and offline development.
#[async_trait]
pub trait TikHubApi: Send + Sync {
    /// Fetch the full, unfiltered tool catalog (`GET /tools`)
    async fn list_tools(&self) -> TikHubResult<Vec<ToolDescriptor>>;

    /// Invoke a tool by its remote name (`POST /tools/call`)
    async fn call_tool(&self, tool_name: &str, arguments: Value) -> TikHubResult<ToolCallResponse>;
}
