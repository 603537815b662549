//! Error-to-data boundary around every registered executor

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::error::PluginResult;
use crate::host::{ToolExecutor, ToolOutput};
use crate::log_error;
use crate::logging::Logger;

/// Fallible tool logic, wrapped by `GuardedExecutor` before registration
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name used in log lines
    fn name(&self) -> &str;

    async fn handle(&self, params: Value) -> PluginResult<Value>;

    /// Payload returned in place of a result when `handle` fails
    fn failure(&self, message: String) -> Value {
        json!({ "error": message })
    }
}

/// Executor that turns handler errors into failure payloads
///
/// A failing call is logged and reported as data; it never surfaces to the
/// host as an error.
pub struct GuardedExecutor<H> {
    handler: H,
    logger: Arc<dyn Logger>,
}

impl<H: ToolHandler> GuardedExecutor<H> {
    pub fn new(handler: H, logger: Arc<dyn Logger>) -> Self {
        Self { handler, logger }
    }

    /// Wrap and erase the handler type
    pub fn shared(handler: H, logger: Arc<dyn Logger>) -> Arc<dyn ToolExecutor>
    where
        H: 'static,
    {
        Arc::new(Self::new(handler, logger))
    }
}

#[async_trait]
impl<H: ToolHandler> ToolExecutor for GuardedExecutor<H> {
    async fn execute(&self, params: Value) -> ToolOutput {
        let details = match self.handler.handle(params).await {
            Ok(details) => details,
            Err(e) => {
                let message = e.to_string();
                log_error!(self.logger, "Tool {} failed: {}", self.handler.name(), message);
                self.handler.failure(message)
            }
        };

        ToolOutput::json(details)
    }
}
