//! Remote client error types

use thiserror::Error;

/// Errors that can occur while talking to the TikHub API
#[derive(Error, Debug)]
pub enum TikHubError {
    /// The API answered with a non-success status
    #[error("TikHub API error: {status} {status_text}")]
    Remote { status: u16, status_text: String },

    /// The request never produced a response
    #[error("TikHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape
    #[error("TikHub returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid TikHub base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl TikHubError {
    /// Create a remote status error
    pub fn remote(status: u16, status_text: impl Into<String>) -> Self {
        Self::Remote {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a remote error from a raw status code, with its canonical reason
    pub fn from_status(status: u16) -> Self {
        let text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default();
        Self::remote(status, text)
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type TikHubResult<T> = Result<T, TikHubError>;
