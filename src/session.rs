//! Explicit session context.
//!
//! Who is signed in lives in a [`SessionContext`] value created at the
//! composition root and handed to the remote client, instead of a
//! process-wide global. Clones share the same slot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::config::SecureString;

/// Tokens and identity for a signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user_id: String,
    pub email: Option<String>,
    pub access_token: SecureString,
    pub refresh_token: Option<SecureString>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// True once `expires_at` has passed. Sessions without an expiry never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Shared, swappable slot holding the current session.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: AuthSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Replace the current session.
    pub fn set(&self, session: AuthSession) {
        tracing::info!(user_id = %session.user_id, "session started");
        *self.inner.write() = Some(session);
    }

    /// Forget the current session. Returns the session that was cleared.
    pub fn clear(&self) -> Option<AuthSession> {
        let previous = self.inner.write().take();
        if let Some(ref session) = previous {
            tracing::info!(user_id = %session.user_id, "session cleared");
        }
        previous
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.inner.read().clone()
    }

    pub fn access_token(&self) -> Option<SecureString> {
        self.inner.read().as_ref().map(|s| s.access_token.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.user_id.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.read().is_some()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("user_id", &self.user_id())
            .finish()
    }
}
