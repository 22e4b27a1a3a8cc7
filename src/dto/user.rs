use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{UserAccount, UserRole};

/// Row of the `users` profile table.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "full_name")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserDto> for UserAccount {
    fn from(dto: UserDto) -> Self {
        let email = dto.email.unwrap_or_default();
        // Fall back to the mailbox name when no display name was stored.
        let display_name = dto
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

        UserAccount {
            id: dto.id,
            role: dto.role.as_deref().map(UserRole::parse).unwrap_or_default(),
            display_name,
            email,
            phone: dto.phone,
            avatar_url: dto.avatar_url,
            created_at: dto.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUserProfile {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
