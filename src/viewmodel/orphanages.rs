use async_trait::async_trait;

use super::list::{matches_search, FilterSet, ListHolder, ListSource};
use crate::domain::{OrphanageProfile, VerificationStatus};
use crate::repository::{OrphanageCriteria, OrphanageRepository, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrphanageFilters {
    pub verification: Option<VerificationStatus>,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrphanageFilterChange {
    Verification(Option<VerificationStatus>),
    Search(String),
}

impl FilterSet for OrphanageFilters {
    type Record = OrphanageProfile;
    type Change = OrphanageFilterChange;

    fn apply(&mut self, change: OrphanageFilterChange) {
        match change {
            OrphanageFilterChange::Verification(status) => self.verification = status,
            OrphanageFilterChange::Search(search) => self.search = search,
        }
    }

    fn matches(&self, orphanage: &OrphanageProfile) -> bool {
        self.verification
            .is_none_or(|v| orphanage.verification_status == v)
            && matches_search(
                &self.search,
                [
                    Some(orphanage.name.as_str()),
                    Some(orphanage.city.as_str()),
                    orphanage.contact_email.as_deref(),
                ],
            )
    }
}

pub struct OrphanagesSource {
    repository: OrphanageRepository,
    criteria: OrphanageCriteria,
}

#[async_trait]
impl ListSource for OrphanagesSource {
    type Record = OrphanageProfile;

    async fn load(&self) -> Outcome<Vec<OrphanageProfile>> {
        self.repository.fetch_all(&self.criteria).await
    }
}

/// Orphanage directory. Read-only.
pub type OrphanagesViewModel = ListHolder<OrphanagesSource, OrphanageFilters>;

impl ListHolder<OrphanagesSource, OrphanageFilters> {
    pub fn with_criteria(repository: OrphanageRepository, criteria: OrphanageCriteria) -> Self {
        ListHolder::new(OrphanagesSource {
            repository,
            criteria,
        })
    }
}
