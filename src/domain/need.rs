use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a need. Ordering follows urgency: `Low < Medium < High < Urgent`.
/// Defaults to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl NeedPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            NeedPriority::Low => "low",
            NeedPriority::Medium => "medium",
            NeedPriority::High => "high",
            NeedPriority::Urgent => "urgent",
        }
    }

    /// Parse a wire value. Unknown values map to `Medium`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => NeedPriority::Low,
            "high" => NeedPriority::High,
            "urgent" | "critical" => NeedPriority::Urgent,
            _ => NeedPriority::Medium,
        }
    }
}

impl fmt::Display for NeedPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedStatus {
    #[default]
    Active,
    Fulfilled,
    Cancelled,
}

impl NeedStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NeedStatus::Active => "active",
            NeedStatus::Fulfilled => "fulfilled",
            NeedStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a wire value. Unknown values map to `Active`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "fulfilled" => NeedStatus::Fulfilled,
            "cancelled" | "canceled" => NeedStatus::Cancelled,
            _ => NeedStatus::Active,
        }
    }
}

impl fmt::Display for NeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Need {
    pub id: String,
    pub orphanage_id: String,
    pub category_id: Option<String>,
    pub item_name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub quantity_fulfilled: i32,
    pub priority: NeedPriority,
    pub status: NeedStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Need {
    /// Units still outstanding, never negative.
    pub fn remaining(&self) -> i32 {
        self.quantity.saturating_sub(self.quantity_fulfilled).max(0)
    }
}
