use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Donor,
    Orphanage,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Donor => "donor",
            UserRole::Orphanage => "orphanage",
            UserRole::Admin => "admin",
        }
    }

    /// Parse a wire value. Unknown values map to `Donor`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "orphanage" => UserRole::Orphanage,
            "admin" => UserRole::Admin,
            _ => UserRole::Donor,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub display_name: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
