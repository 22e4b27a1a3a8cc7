use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a donation.
///
/// ```text
/// Pending ──→ Confirmed ──→ Completed
///    │            │
///    └────────────┴──────→ Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl DonationStatus {
    pub const ALL: [DonationStatus; 4] = [
        DonationStatus::Pending,
        DonationStatus::Confirmed,
        DonationStatus::Completed,
        DonationStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Confirmed => "confirmed",
            DonationStatus::Completed => "completed",
            DonationStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a wire value. Unknown values map to `Pending`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "confirmed" => DonationStatus::Confirmed,
            "completed" => DonationStatus::Completed,
            "cancelled" | "canceled" => DonationStatus::Cancelled,
            _ => DonationStatus::Pending,
        }
    }

    /// States reachable in one step.
    pub fn next_states(self) -> &'static [DonationStatus] {
        match self {
            DonationStatus::Pending => &[DonationStatus::Confirmed, DonationStatus::Cancelled],
            DonationStatus::Confirmed => &[DonationStatus::Completed, DonationStatus::Cancelled],
            DonationStatus::Completed | DonationStatus::Cancelled => &[],
        }
    }

    /// Whether `next` follows the forward-only lifecycle.
    ///
    /// Informational: `DonationRepository::update_status` does not call this.
    pub fn can_transition_to(self, next: DonationStatus) -> bool {
        self.next_states().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.next_states().is_empty()
    }

    /// Only pending donations may be deleted.
    pub fn is_deletable(self) -> bool {
        self == DonationStatus::Pending
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationType {
    #[default]
    Monetary,
    InKind,
}

impl DonationType {
    pub fn as_str(self) -> &'static str {
        match self {
            DonationType::Monetary => "monetary",
            DonationType::InKind => "in_kind",
        }
    }

    /// Parse a wire value. Unknown values map to `Monetary`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "in_kind" | "inkind" | "items" => DonationType::InKind,
            _ => DonationType::Monetary,
        }
    }
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DonationRecord {
    pub id: String,
    pub donor_id: String,
    pub orphanage_id: String,
    pub category_id: Option<String>,
    pub need_id: Option<String>,
    pub donation_type: DonationType,
    pub amount: Option<f64>,
    pub item_description: Option<String>,
    pub quantity: Option<i32>,
    pub status: DonationStatus,
    pub is_recurring: bool,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_moves_forward_only() {
        use DonationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
    }

    #[test]
    fn terminal_states() {
        assert!(DonationStatus::Completed.is_terminal());
        assert!(DonationStatus::Cancelled.is_terminal());
        assert!(!DonationStatus::Pending.is_terminal());
        assert!(!DonationStatus::Confirmed.is_terminal());
    }

    #[test]
    fn only_pending_is_deletable() {
        let deletable: Vec<_> = DonationStatus::ALL
            .iter()
            .filter(|s| s.is_deletable())
            .collect();
        assert_eq!(deletable, vec![&DonationStatus::Pending]);
    }

    #[test]
    fn parse_round_trips_and_defaults() {
        for status in DonationStatus::ALL {
            assert_eq!(DonationStatus::parse(status.as_str()), status);
        }
        assert_eq!(DonationStatus::parse("CANCELED"), DonationStatus::Cancelled);
        assert_eq!(DonationStatus::parse("bogus"), DonationStatus::Pending);

        assert_eq!(DonationType::parse("in_kind"), DonationType::InKind);
        assert_eq!(DonationType::parse("In-Kind"), DonationType::InKind);
        assert_eq!(DonationType::parse("cash"), DonationType::Monetary);
    }
}
