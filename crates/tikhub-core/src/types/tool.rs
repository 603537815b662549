//! Tool descriptor and invocation types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A tool advertised by the remote `/tools` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name (e.g. `xiaohongshu_web_search_notes`)
    pub name: String,
    /// Description of what the tool does
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl ToolDescriptor {
    /// Create a new tool descriptor
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Body of a `POST /tools/call` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Remote tool name, without any host namespace prefix
    pub tool_name: String,
    /// Arguments forwarded verbatim
    pub arguments: Value,
}

impl ToolCallRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// The `result` object the remote wraps around a tool's payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default)]
    pub data: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Parsed response of a `POST /tools/call` request
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCallResponse {
    /// The body carried a well-formed `result` envelope
    Envelope(ResultEnvelope),
    /// Any other shape, passed through unchanged
    Raw(Value),
}

impl ToolCallResponse {
    /// Interpret a response body
    ///
    /// Only an object under `result` that decodes as an envelope is unwrapped.
    /// Everything else is kept as-is so unknown shapes reach the caller.
    pub fn from_value(body: Value) -> Self {
        let envelope = body
            .get("result")
            .filter(|result| result.is_object())
            .and_then(|result| serde_json::from_value::<ResultEnvelope>(result.clone()).ok());

        match envelope {
            Some(envelope) => Self::Envelope(envelope),
            None => Self::Raw(body),
        }
    }
}

/// Outcome of a single tool invocation, as reported to the host
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    Success {
        code: i64,
        message: String,
        data: Value,
    },
    /// Response without an envelope, returned verbatim
    Raw(Value),
    Failure { error: String },
}

impl InvocationResult {
    /// Create a failure result
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// Whether this result represents a failed call
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Render the result in the shape the host returns to the agent
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success {
                code,
                message,
                data,
            } => json!({
                "success": true,
                "code": code,
                "message": message,
                "data": data,
            }),
            Self::Raw(body) => body.clone(),
            Self::Failure { error } => json!({
                "success": false,
                "error": error,
            }),
        }
    }
}

impl From<ToolCallResponse> for InvocationResult {
    fn from(response: ToolCallResponse) -> Self {
        match response {
            ToolCallResponse::Envelope(ResultEnvelope {
                code,
                data,
                message,
            }) => Self::Success {
                code,
                message,
                data,
            },
            ToolCallResponse::Raw(body) => Self::Raw(body),
        }
    }
}

impl From<InvocationResult> for Value {
    fn from(result: InvocationResult) -> Self {
        result.to_json()
    }
}
