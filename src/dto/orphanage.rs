use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{OrphanageProfile, VerificationStatus};

/// Row of the `orphanages` table.
#[derive(Debug, Clone, Deserialize)]
pub struct OrphanageDto {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub children_count: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<OrphanageDto> for OrphanageProfile {
    fn from(dto: OrphanageDto) -> Self {
        OrphanageProfile {
            id: dto.id,
            user_id: dto.user_id,
            name: dto.name,
            description: dto.description,
            address: dto.address.unwrap_or_default(),
            city: dto.city.unwrap_or_default(),
            state: dto.state,
            country: dto.country,
            postal_code: dto.postal_code,
            contact_email: dto.contact_email,
            contact_phone: dto.contact_phone,
            children_count: dto.children_count,
            image_url: dto.image_url,
            verification_status: dto
                .verification_status
                .as_deref()
                .map(VerificationStatus::parse)
                .unwrap_or_default(),
            rating: dto.rating.unwrap_or(0.0),
            created_at: dto.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrphanage {
    pub name: String,
    pub address: String,
    pub city: String,
    pub verification_status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewOrphanage {
    /// A profile awaiting verification with no optional fields set.
    pub fn new(name: impl Into<String>, address: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            city: city.into(),
            verification_status: VerificationStatus::Pending,
            user_id: None,
            description: None,
            state: None,
            country: None,
            postal_code: None,
            contact_email: None,
            contact_phone: None,
            children_count: None,
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrphanagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
}

impl OrphanagePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
