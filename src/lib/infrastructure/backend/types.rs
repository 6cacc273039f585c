//! Backend error type

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a backend round-trip. Every variant is recovered locally by the session.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error calling '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("'{endpoint}' returned status {status}")]
    Status { endpoint: String, status: StatusCode },
    #[error("'{endpoint}' returned a malformed body: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl BackendError {
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn decode(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            BackendError::Transport { endpoint, .. }
            | BackendError::Status { endpoint, .. }
            | BackendError::Decode { endpoint, .. } => endpoint,
        }
    }

    /// Short hint for the status line; the transcript always shows the fixed fallback text.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Transport { source, .. } => {
                if source.is_connect() {
                    "Cannot reach the chat server.".to_string()
                } else if source.is_timeout() {
                    "The chat server took too long to answer.".to_string()
                } else {
                    "Network error while talking to the chat server.".to_string()
                }
            }
            BackendError::Status { status, .. } => match *status {
                StatusCode::NOT_FOUND => "Chat endpoint not found.".to_string(),
                StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                    "The chat server is unavailable.".to_string()
                }
                _ => format!("The chat server answered with status {}.", status.as_u16()),
            },
            BackendError::Decode { .. } => "The chat server sent an unreadable reply.".to_string(),
        }
    }
}
