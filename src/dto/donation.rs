use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DonationRecord, DonationStatus, DonationType};

/// Row of the `donations` table.
#[derive(Debug, Clone, Deserialize)]
pub struct DonationDto {
    pub id: String,
    pub donor_id: String,
    pub orphanage_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub need_id: Option<String>,
    #[serde(default)]
    pub donation_type: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub item_description: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_opt")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<DonationDto> for DonationRecord {
    fn from(dto: DonationDto) -> Self {
        DonationRecord {
            id: dto.id,
            donor_id: dto.donor_id,
            orphanage_id: dto.orphanage_id,
            category_id: dto.category_id,
            need_id: dto.need_id,
            donation_type: dto
                .donation_type
                .as_deref()
                .map(DonationType::parse)
                .unwrap_or_default(),
            amount: dto.amount,
            item_description: dto.item_description,
            quantity: dto.quantity,
            status: dto
                .status
                .as_deref()
                .map(DonationStatus::parse)
                .unwrap_or_default(),
            is_recurring: dto.is_recurring.unwrap_or(false),
            notes: dto.notes,
            created_at: dto.created_at,
            completed_at: dto.completed_at,
        }
    }
}

/// Insert payload for a donation. Absent optionals are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDonation {
    pub donor_id: String,
    pub orphanage_id: String,
    pub donation_type: DonationType,
    pub status: DonationStatus,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewDonation {
    /// A pending, non-recurring donation with no optional fields set.
    pub fn new(
        donor_id: impl Into<String>,
        orphanage_id: impl Into<String>,
        donation_type: DonationType,
    ) -> Self {
        Self {
            donor_id: donor_id.into(),
            orphanage_id: orphanage_id.into(),
            donation_type,
            status: DonationStatus::Pending,
            is_recurring: false,
            category_id: None,
            need_id: None,
            amount: None,
            item_description: None,
            quantity: None,
            notes: None,
        }
    }
}

/// Partial update for a donation. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DonationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DonationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl DonationPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
