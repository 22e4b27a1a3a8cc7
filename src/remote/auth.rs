//! Auth sub-client (sign up, sign in, sign out, user lookup, password reset).

use chrono::{Duration, Utc};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::SecureString;
use crate::remote::client::RemoteClient;
use crate::remote::error::RemoteError;
use crate::session::AuthSession;

/// User object returned by the auth service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<Value>,
}

/// Token grant returned by sign-in (and by sign-up when no confirmation is required).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    /// An `expires_in` too large to represent leaves the expiry unset.
    pub fn into_session(self) -> AuthSession {
        AuthSession {
            user_id: self.user.id,
            email: self.user.email,
            access_token: SecureString::new(self.access_token),
            refresh_token: self.refresh_token.map(SecureString::new),
            expires_at: self
                .expires_in
                .and_then(Duration::try_seconds)
                .and_then(|ttl| Utc::now().checked_add_signed(ttl)),
        }
    }
}

/// Sign-up answers with a session when email confirmation is off, and with
/// the bare user otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(TokenResponse),
    User(AuthUser),
}

impl SignUpResponse {
    pub fn user(&self) -> &AuthUser {
        match self {
            SignUpResponse::Session(tokens) => &tokens.user,
            SignUpResponse::User(user) => user,
        }
    }
}

#[derive(Clone)]
pub struct AuthClient {
    client: RemoteClient,
}

impl AuthClient {
    pub(crate) fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Value,
    ) -> Result<SignUpResponse, RemoteError> {
        let body = json!({ "email": email, "password": password, "data": metadata });
        let builder = self
            .client
            .request(Method::POST, self.client.endpoint("auth/v1/signup")?)
            .json(&body);
        let text = self.client.execute(builder).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse, RemoteError> {
        let body = json!({ "email": email, "password": password });
        let builder = self
            .client
            .request(Method::POST, self.client.endpoint("auth/v1/token")?)
            .query(&[("grant_type", "password")])
            .json(&body);
        let text = self.client.execute(builder).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Revoke the current session's token on the server.
    pub async fn sign_out(&self) -> Result<(), RemoteError> {
        self.require_session()?;
        let builder = self
            .client
            .request(Method::POST, self.client.endpoint("auth/v1/logout")?);
        self.client.execute(builder).await?;
        Ok(())
    }

    /// The user behind the current access token.
    pub async fn get_user(&self) -> Result<AuthUser, RemoteError> {
        self.require_session()?;
        let builder = self
            .client
            .request(Method::GET, self.client.endpoint("auth/v1/user")?);
        let text = self.client.execute(builder).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn reset_password_for_email(&self, email: &str) -> Result<(), RemoteError> {
        let builder = self
            .client
            .request(Method::POST, self.client.endpoint("auth/v1/recover")?)
            .json(&json!({ "email": email }));
        self.client.execute(builder).await?;
        Ok(())
    }

    fn require_session(&self) -> Result<(), RemoteError> {
        if self.client.session().is_signed_in() {
            Ok(())
        } else {
            Err(RemoteError::NoSession)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_response_with_session() {
        let body = r#"{"access_token":"jwt","refresh_token":"r","expires_in":3600,"token_type":"bearer","user":{"id":"u-1","email":"a@b.c"}}"#;
        let parsed: SignUpResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, SignUpResponse::Session(_)));
        assert_eq!(parsed.user().id, "u-1");
    }

    #[test]
    fn test_sign_up_response_pending_confirmation() {
        let body = r#"{"id":"u-2","email":"x@y.z","confirmation_sent_at":"2024-01-01T00:00:00Z"}"#;
        let parsed: SignUpResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, SignUpResponse::User(_)));
        assert_eq!(parsed.user().email.as_deref(), Some("x@y.z"));
    }

    #[test]
    fn test_token_response_into_session() {
        let tokens: TokenResponse = serde_json::from_str(
            r#"{"access_token":"jwt","expires_in":60,"user":{"id":"u-1"}}"#,
        )
        .unwrap();
        let session = tokens.into_session();
        assert_eq!(session.user_id, "u-1");
        assert_eq!(session.access_token.expose(), "jwt");
        assert!(session.refresh_token.is_none());
        assert!(session.expires_at.is_some());
    }

    #[test]
    fn test_token_response_with_huge_expiry() {
        let tokens: TokenResponse = serde_json::from_str(
            r#"{"access_token":"jwt","expires_in":9223372036854775807,"user":{"id":"u-1"}}"#,
        )
        .unwrap();
        let session = tokens.into_session();
        assert_eq!(session.user_id, "u-1");
        assert!(session.expires_at.is_none());
    }
}
