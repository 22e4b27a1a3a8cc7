//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use donorlink::config::SecureString;
use donorlink::remote::RemoteClient;
use donorlink::session::{AuthSession, SessionContext};
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

use mock_backend::MockBackend;

pub const ANON_KEY: &str = "anon-test-key";
pub const ACCESS_TOKEN: &str = "user-access-token";

/// Client pointed at `mock`, signed out.
pub fn client_for(mock: &MockBackend) -> RemoteClient {
    client_with(mock, SessionContext::new())
}

/// Client pointed at `mock`, signed in as `user_id`.
pub fn signed_in_client(mock: &MockBackend, user_id: &str) -> RemoteClient {
    client_with(mock, SessionContext::with_session(session_for(user_id)))
}

pub fn client_with(mock: &MockBackend, session: SessionContext) -> RemoteClient {
    RemoteClient::builder(&mock.base_url(), SecureString::new(ANON_KEY))
        .session(session)
        .build()
        .expect("client should build")
}

pub fn session_for(user_id: &str) -> AuthSession {
    AuthSession {
        user_id: user_id.to_string(),
        email: Some(format!("{}@example.com", user_id)),
        access_token: SecureString::new(ACCESS_TOKEN),
        refresh_token: None,
        expires_at: None,
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Row fixtures ---------------------------------------------------------------

pub fn donation_row(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "donor_id": "donor-1",
        "orphanage_id": "orph-1",
        "donation_type": "monetary",
        "amount": 25.0,
        "status": status,
        "is_recurring": false,
        "created_at": "2024-03-01T10:00:00+00:00"
    })
}

pub fn need_row(id: &str, orphanage_id: &str, item_name: &str, priority: &str) -> Value {
    json!({
        "id": id,
        "orphanage_id": orphanage_id,
        "item_name": item_name,
        "quantity": 10,
        "quantity_fulfilled": 0,
        "priority": priority,
        "status": "active",
        "created_at": "2024-03-01T10:00:00+00:00"
    })
}

pub fn orphanage_row(id: &str, name: &str, verification_status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "address": "1 Main St",
        "city": "Nairobi",
        "verification_status": verification_status,
        "rating": 4.5
    })
}

pub fn user_row(id: &str, email: &str, role: &str, display_name: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "role": role,
        "display_name": display_name
    })
}

pub fn token_response(user_id: &str, email: &str) -> Value {
    json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-token",
        "user": { "id": user_id, "email": email }
    })
}
