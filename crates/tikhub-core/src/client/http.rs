//! reqwest-backed TikHub client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde_json::Value;

use super::error::{TikHubError, TikHubResult};
use super::traits::TikHubApi;
use crate::config::PluginConfig;
use crate::logging::Logger;
use crate::types::{ToolCallRequest, ToolCallResponse, ToolDescriptor};
use crate::log_debug;

const TOOLS_PATH: &str = "/tools";
const CALL_PATH: &str = "/tools/call";

/// HTTP client for the TikHub REST endpoints
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_token: String,
    logger: Arc<dyn Logger>,
}

impl HttpClient {
    /// Create a client for `base_url`, authenticating with `api_token`
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> TikHubResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Url::parse(&base_url).map_err(|e| TikHubError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
            api_token: api_token.into(),
            logger,
        })
    }

    /// Create a client from the plugin configuration
    pub fn from_config(config: &PluginConfig, logger: Arc<dyn Logger>) -> TikHubResult<Self> {
        Self::new(config.base_url.clone(), config.api_token.clone(), logger)
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue an authenticated request and parse the JSON response body
    pub async fn request(&self, path: &str, method: Method, body: Option<&Value>) -> TikHubResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        log_debug!(self.logger, "{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(TikHubError::from_status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| TikHubError::malformed(format!("{} is not valid JSON: {}", path, e)))
    }
}

#[async_trait]
impl TikHubApi for HttpClient {
    async fn list_tools(&self) -> TikHubResult<Vec<ToolDescriptor>> {
        let body = self.request(TOOLS_PATH, Method::GET, None).await?;

        if !body.is_array() {
            return Err(TikHubError::malformed(format!(
                "{} did not return an array",
                TOOLS_PATH
            )));
        }

        serde_json::from_value(body)
            .map_err(|e| TikHubError::malformed(format!("invalid tool descriptor: {}", e)))
    }

    async fn call_tool(&self, tool_name: &str, arguments: Value) -> TikHubResult<ToolCallResponse> {
        let request = ToolCallRequest::new(tool_name, arguments);
        let body = serde_json::to_value(&request)
            .map_err(|e| TikHubError::malformed(format!("unserializable arguments: {}", e)))?;

        let response = self.request(CALL_PATH, Method::POST, Some(&body)).await?;
        Ok(ToolCallResponse::from_value(response))
    }
}
