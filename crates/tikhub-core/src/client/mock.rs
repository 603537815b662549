//! Mock TikHub API for testing
//!
//! Serves a fixed catalog and canned call responses without network access,
//! and counts requests so memoization and routing can be asserted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::error::{TikHubError, TikHubResult};
use super::traits::TikHubApi;
use crate::types::{ToolCallRequest, ToolCallResponse, ToolDescriptor};

/// How the mock answers `call_tool`
#[derive(Debug, Clone)]
pub enum MockCallMode {
    /// Return this body for every call
    Fixed(Value),
    /// Echo the request back inside a `result` envelope
    Echo,
    /// Fail with this HTTP status
    Status(u16),
}

impl Default for MockCallMode {
    fn default() -> Self {
        MockCallMode::Echo
    }
}

/// In-memory stand-in for the TikHub API
#[derive(Debug, Default)]
pub struct MockApi {
    tools: Vec<ToolDescriptor>,
    list_status: Mutex<Option<u16>>,
    call_mode: MockCallMode,
    delay: Option<Duration>,
    list_calls: AtomicUsize,
    calls: Mutex<Vec<ToolCallRequest>>,
}

impl MockApi {
    /// Create a mock serving the given catalog
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self {
            tools,
            ..Default::default()
        }
    }

    /// Create a mock serving tools with the given names
    pub fn with_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(
            names
                .into_iter()
                .map(|name| ToolDescriptor::new(name, format!("{} tool", name)))
                .collect(),
        )
    }

    /// Set how `call_tool` responds
    pub fn with_call_mode(mut self, mode: MockCallMode) -> Self {
        self.call_mode = mode;
        self
    }

    /// Make `list_tools` fail with the given status
    pub fn with_list_status(self, status: u16) -> Self {
        *self.list_status.lock() = Some(status);
        self
    }

    /// Delay every response, to widen concurrency windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Clear or change the `list_tools` failure at runtime
    pub fn set_list_status(&self, status: Option<u16>) {
        *self.list_status.lock() = status;
    }

    /// Number of discovery requests served
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Every invocation received, in order
    pub fn calls(&self) -> Vec<ToolCallRequest> {
        self.calls.lock().clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl TikHubApi for MockApi {
    async fn list_tools(&self) -> TikHubResult<Vec<ToolDescriptor>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;

        let status = *self.list_status.lock();
        match status {
            Some(status) => Err(TikHubError::from_status(status)),
            None => Ok(self.tools.clone()),
        }
    }

    async fn call_tool(&self, tool_name: &str, arguments: Value) -> TikHubResult<ToolCallResponse> {
        self.calls
            .lock()
            .push(ToolCallRequest::new(tool_name, arguments.clone()));
        self.pause().await;

        match &self.call_mode {
            MockCallMode::Fixed(body) => Ok(ToolCallResponse::from_value(body.clone())),
            MockCallMode::Echo => Ok(ToolCallResponse::from_value(serde_json::json!({
                "result": {
                    "code": 200,
                    "data": { "tool_name": tool_name, "arguments": arguments },
                    "message": "ok"
                }
            }))),
            MockCallMode::Status(status) => Err(TikHubError::from_status(*status)),
        }
    }
}
