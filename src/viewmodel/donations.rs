use async_trait::async_trait;

use super::list::{matches_search, FilterSet, ListHolder, ListSource};
use crate::domain::{DonationRecord, DonationStatus, DonationType};
use crate::repository::{DonationCriteria, DonationRepository, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonationFilters {
    pub donation_type: Option<DonationType>,
    pub status: Option<DonationStatus>,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DonationFilterChange {
    Type(Option<DonationType>),
    Status(Option<DonationStatus>),
    Search(String),
}

impl FilterSet for DonationFilters {
    type Record = DonationRecord;
    type Change = DonationFilterChange;

    fn apply(&mut self, change: DonationFilterChange) {
        match change {
            DonationFilterChange::Type(donation_type) => self.donation_type = donation_type,
            DonationFilterChange::Status(status) => self.status = status,
            DonationFilterChange::Search(search) => self.search = search,
        }
    }

    fn matches(&self, donation: &DonationRecord) -> bool {
        self.donation_type.is_none_or(|t| donation.donation_type == t)
            && self.status.is_none_or(|s| donation.status == s)
            && matches_search(
                &self.search,
                [
                    donation.item_description.as_deref(),
                    donation.notes.as_deref(),
                    Some(donation.id.as_str()),
                ],
            )
    }
}

pub struct DonationsSource {
    repository: DonationRepository,
    criteria: DonationCriteria,
}

#[async_trait]
impl ListSource for DonationsSource {
    type Record = DonationRecord;

    async fn load(&self) -> Outcome<Vec<DonationRecord>> {
        self.repository.fetch_all(&self.criteria).await
    }
}

/// Donation history for a donor, or incoming donations for an orphanage.
pub type DonationsViewModel = ListHolder<DonationsSource, DonationFilters>;

impl ListHolder<DonationsSource, DonationFilters> {
    pub fn with_criteria(repository: DonationRepository, criteria: DonationCriteria) -> Self {
        ListHolder::new(DonationsSource {
            repository,
            criteria,
        })
    }

    pub async fn update_status(&self, id: &str, status: DonationStatus) -> bool {
        let repository = &self.source().repository;
        self.mutate(repository.update_status(id, status), |_| {
            format!("Donation marked as {status}")
        })
        .await
    }

    /// Delete a pending donation. Anything else is refused by the repository.
    pub async fn delete(&self, id: &str) -> bool {
        let repository = &self.source().repository;
        self.mutate(repository.delete(id), |_| "Donation deleted".to_string())
            .await
    }
}
