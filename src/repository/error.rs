use thiserror::Error;

use crate::remote::RemoteError;

/// Message used when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Failure of a repository operation.
///
/// Deliberately opaque: callers get one human-readable message and cannot
/// tell a missing row from a network failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RepositoryError {
    message: String,
}

impl RepositoryError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self {
                message: FALLBACK_MESSAGE.to_string(),
            }
        } else {
            Self { message }
        }
    }

    /// "`<entity>` not found".
    pub fn not_found(entity: &str) -> Self {
        Self::new(format!("{} not found", entity))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<RemoteError> for RepositoryError {
    fn from(err: RemoteError) -> Self {
        Self::new(err.to_string())
    }
}

/// Result of every repository method: the value, or an error message.
pub type Outcome<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(RepositoryError::not_found("Donation").message(), "Donation not found");
    }

    #[test]
    fn empty_message_uses_fallback() {
        assert_eq!(RepositoryError::new("  ").message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn remote_errors_flatten_to_their_text() {
        let err = RepositoryError::from(RemoteError::Api {
            status: 409,
            message: "duplicate key value".to_string(),
        });
        assert_eq!(err.to_string(), "duplicate key value");
        assert_eq!(RepositoryError::from(RemoteError::NoSession).message(), "Not signed in");
    }
}
