use serde_json::json;

use super::{by_id, failed, fetch_first, tables, Outcome, RepositoryError};
use crate::domain::{UserAccount, UserRole};
use crate::dto::{NewUserProfile, UserDto, UserPatch};
use crate::remote::{AuthClient, RemoteClient, SignUpResponse, TableClient};
use crate::session::SessionContext;

/// Fields collected by the registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

#[derive(Clone)]
pub struct AuthRepository {
    auth: AuthClient,
    users: TableClient,
    session: SessionContext,
}

impl AuthRepository {
    pub fn new(client: &RemoteClient) -> Self {
        Self {
            auth: client.auth(),
            users: client.table(tables::USERS),
            session: client.session().clone(),
        }
    }

    /// Create the auth user, then its `users` profile row.
    ///
    /// When the backend signs the user in immediately the session is stored;
    /// when email confirmation is required the profile is still created and
    /// the caller stays signed out.
    pub async fn sign_up(&self, request: SignUpRequest) -> Outcome<UserAccount> {
        let metadata = json!({
            "display_name": request.display_name,
            "role": request.role.as_str(),
        });
        let response = self
            .auth
            .sign_up(&request.email, &request.password, metadata)
            .await
            .map_err(|e| failed("sign up", e))?;

        let user_id = response.user().id.clone();
        if let SignUpResponse::Session(tokens) = response {
            self.session.set(tokens.into_session());
        }

        let profile = NewUserProfile {
            id: user_id.clone(),
            email: request.email,
            role: request.role,
            display_name: request.display_name,
            phone: request.phone,
        };
        self.users
            .insert(&profile)
            .await
            .map_err(|e| failed("create profile", e))?;

        self.fetch_profile(&user_id).await
    }

    /// Sign in with email and password and load the user's profile.
    pub async fn sign_in(&self, email: &str, password: &str) -> Outcome<UserAccount> {
        let tokens = self
            .auth
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| failed("sign in", e))?;
        let user_id = tokens.user.id.clone();
        self.session.set(tokens.into_session());

        self.fetch_profile(&user_id).await
    }

    /// Revoke the session remotely and forget it locally.
    ///
    /// The local session is cleared even if the remote call fails.
    pub async fn sign_out(&self) -> Outcome<()> {
        if !self.session.is_signed_in() {
            return Ok(());
        }
        if let Err(err) = self.auth.sign_out().await {
            tracing::warn!(error = %err, "remote sign out failed, clearing local session anyway");
        }
        self.session.clear();
        Ok(())
    }

    /// Profile of the signed-in user, or `None` when signed out.
    pub async fn current_user(&self) -> Outcome<Option<UserAccount>> {
        match self.session.user_id() {
            Some(user_id) => self.fetch_profile(&user_id).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn send_password_reset(&self, email: &str) -> Outcome<()> {
        self.auth
            .reset_password_for_email(email)
            .await
            .map_err(|e| failed("password reset", e))
    }

    /// Update the signed-in user's profile. An empty patch succeeds without a request.
    pub async fn update_profile(&self, patch: &UserPatch) -> Outcome<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let user_id = self
            .session
            .user_id()
            .ok_or_else(|| RepositoryError::new("Not signed in"))?;
        self.users
            .update(patch, &by_id(&user_id))
            .await
            .map_err(|e| failed("update profile", e))
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    async fn fetch_profile(&self, user_id: &str) -> Outcome<UserAccount> {
        fetch_first::<UserDto, _>(&self.users, by_id(user_id), "User", "fetch profile").await
    }
}
