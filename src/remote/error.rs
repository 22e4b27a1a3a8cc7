//! Error types for the remote store client.

use thiserror::Error;

/// Errors that can occur while talking to the hosted backend.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Connection failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A URL could not be built from the configured base and path.
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    /// A request needed a signed-in session and none was present.
    #[error("Not signed in")]
    NoSession,

    /// An update or delete was issued without any filter.
    #[error("Refusing to {operation} every row of '{table}'")]
    UnfilteredWrite { operation: &'static str, table: String },

    /// The configured total request timeout elapsed.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },
}

impl RemoteError {
    /// HTTP status for API errors, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Api { status, .. } => Some(*status),
            RemoteError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Build an API error from a non-success response body.
    ///
    /// Table and storage endpoints report `message`; the auth service uses
    /// `msg`, `error_description` or `error`. Anything else falls back to the
    /// raw body, then to the status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "msg", "error_description", "error"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(String::from))
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    trimmed.to_string()
                }
            });

        RemoteError::Api { status, message }
    }
}
