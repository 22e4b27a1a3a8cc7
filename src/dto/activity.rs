use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ActivityLogEntry;

/// Row of the `activity_logs` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLogDto {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    pub action_type: String,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ActivityLogDto> for ActivityLogEntry {
    fn from(dto: ActivityLogDto) -> Self {
        ActivityLogEntry {
            id: dto.id,
            actor_id: dto.actor_id.unwrap_or_default(),
            action_type: dto.action_type,
            target_type: dto.target_type.unwrap_or_default(),
            target_id: dto.target_id,
            description: dto.description.unwrap_or_default(),
            created_at: dto.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewActivityLog {
    pub actor_id: String,
    pub action_type: String,
    pub target_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}
