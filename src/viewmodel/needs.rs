use async_trait::async_trait;

use super::list::{matches_search, FilterSet, ListHolder, ListSource};
use crate::domain::{Need, NeedPriority, NeedStatus};
use crate::repository::{NeedCriteria, NeedsRepository, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NeedFilters {
    pub priority: Option<NeedPriority>,
    pub status: Option<NeedStatus>,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NeedFilterChange {
    Priority(Option<NeedPriority>),
    Status(Option<NeedStatus>),
    Search(String),
}

impl FilterSet for NeedFilters {
    type Record = Need;
    type Change = NeedFilterChange;

    fn apply(&mut self, change: NeedFilterChange) {
        match change {
            NeedFilterChange::Priority(priority) => self.priority = priority,
            NeedFilterChange::Status(status) => self.status = status,
            NeedFilterChange::Search(search) => self.search = search,
        }
    }

    fn matches(&self, need: &Need) -> bool {
        self.priority.is_none_or(|p| need.priority == p)
            && self.status.is_none_or(|s| need.status == s)
            && matches_search(
                &self.search,
                [Some(need.item_name.as_str()), need.description.as_deref()],
            )
    }
}

pub struct NeedsSource {
    repository: NeedsRepository,
    criteria: NeedCriteria,
}

#[async_trait]
impl ListSource for NeedsSource {
    type Record = Need;

    async fn load(&self) -> Outcome<Vec<Need>> {
        self.repository.fetch_all(&self.criteria).await
    }
}

/// Open needs, either across all orphanages or for one.
pub type NeedsViewModel = ListHolder<NeedsSource, NeedFilters>;

impl ListHolder<NeedsSource, NeedFilters> {
    pub fn with_criteria(repository: NeedsRepository, criteria: NeedCriteria) -> Self {
        ListHolder::new(NeedsSource {
            repository,
            criteria,
        })
    }

    pub async fn fulfil(&self, id: &str) -> bool {
        let repository = &self.source().repository;
        self.mutate(repository.mark_fulfilled(id), |_| {
            "Need marked as fulfilled".to_string()
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> bool {
        let repository = &self.source().repository;
        self.mutate(repository.delete(id), |_| "Need deleted".to_string())
            .await
    }
}
