use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Need, NeedPriority, NeedStatus};

/// Row of the `needs` table.
#[derive(Debug, Clone, Deserialize)]
pub struct NeedDto {
    pub id: String,
    pub orphanage_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub quantity_fulfilled: Option<i32>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<NeedDto> for Need {
    fn from(dto: NeedDto) -> Self {
        Need {
            id: dto.id,
            orphanage_id: dto.orphanage_id,
            category_id: dto.category_id,
            item_name: dto.item_name,
            description: dto.description,
            quantity: dto.quantity.unwrap_or(1),
            quantity_fulfilled: dto.quantity_fulfilled.unwrap_or(0),
            priority: dto
                .priority
                .as_deref()
                .map(NeedPriority::parse)
                .unwrap_or_default(),
            status: dto
                .status
                .as_deref()
                .map(NeedStatus::parse)
                .unwrap_or_default(),
            created_at: dto.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNeed {
    pub orphanage_id: String,
    pub item_name: String,
    pub quantity: i32,
    pub priority: NeedPriority,
    pub status: NeedStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewNeed {
    pub fn new(
        orphanage_id: impl Into<String>,
        item_name: impl Into<String>,
        quantity: i32,
        priority: NeedPriority,
    ) -> Self {
        Self {
            orphanage_id: orphanage_id.into(),
            item_name: item_name.into(),
            quantity,
            priority,
            status: NeedStatus::Active,
            category_id: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NeedPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_fulfilled: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<NeedPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NeedStatus>,
}

impl NeedPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
