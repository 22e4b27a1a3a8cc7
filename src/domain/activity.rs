use chrono::{DateTime, Utc};
use serde::Serialize;

/// Action types written by this crate.
pub mod actions {
    pub const ORPHANAGE_VERIFIED: &str = "orphanage_verified";
    pub const ORPHANAGE_REJECTED: &str = "orphanage_rejected";
    pub const USER_DELETED: &str = "user_deleted";
}

/// Append-only audit entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityLogEntry {
    pub id: String,
    pub actor_id: String,
    pub action_type: String,
    pub target_type: String,
    pub target_id: Option<String>,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}
