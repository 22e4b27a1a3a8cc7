use super::{by_id, failed, fetch_first, fetch_rows, tables, Outcome, RepositoryError, Sort};
use crate::domain::{Category, Need, NeedPriority, NeedStatus};
use crate::dto::{CategoryDto, NeedDto, NeedPatch, NewNeed};
use crate::remote::{Query, RemoteClient, SortDirection, TableClient};

/// Column name that sorts by urgency rather than by stored text.
pub const PRIORITY_COLUMN: &str = "priority";

/// Filters for [`NeedsRepository::fetch_all`]. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeedCriteria {
    pub orphanage_id: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<NeedStatus>,
    pub priority: Option<NeedPriority>,
    pub sort: Sort,
    pub limit: Option<usize>,
}

impl NeedCriteria {
    pub fn for_orphanage(orphanage_id: impl Into<String>) -> Self {
        Self {
            orphanage_id: Some(orphanage_id.into()),
            ..Self::default()
        }
    }

    /// Most urgent first.
    pub fn by_priority(mut self) -> Self {
        self.sort = Sort::by(PRIORITY_COLUMN, SortDirection::Descending);
        self
    }

    fn sorts_by_priority(&self) -> bool {
        self.sort.column == PRIORITY_COLUMN
    }

    fn to_query(&self) -> Query {
        let query = Query::new()
            .eq_opt("orphanage_id", self.orphanage_id.as_deref())
            .eq_opt("category_id", self.category_id.as_deref())
            .eq_opt("status", self.status)
            .eq_opt("priority", self.priority);
        // Priority is stored as text, so the backend would order it
        // alphabetically. Fetch newest first and rank locally instead; the
        // limit is applied after ranking.
        if self.sorts_by_priority() {
            return Sort::default().apply(query);
        }
        let query = self.sort.apply(query);
        match self.limit {
            Some(limit) => query.limit(limit),
            None => query,
        }
    }
}

#[derive(Clone)]
pub struct NeedsRepository {
    needs: TableClient,
    categories: TableClient,
}

impl NeedsRepository {
    pub fn new(client: &RemoteClient) -> Self {
        Self {
            needs: client.table(tables::NEEDS),
            categories: client.table(tables::CATEGORIES),
        }
    }

    pub async fn fetch_all(&self, criteria: &NeedCriteria) -> Outcome<Vec<Need>> {
        let mut needs =
            fetch_rows::<NeedDto, Need>(&self.needs, &criteria.to_query(), "fetch needs").await?;
        if criteria.sorts_by_priority() {
            sort_by_priority(&mut needs, criteria.sort.direction);
            if let Some(limit) = criteria.limit {
                needs.truncate(limit);
            }
        }
        Ok(needs)
    }

    pub async fn fetch_for_orphanage(&self, orphanage_id: &str) -> Outcome<Vec<Need>> {
        self.fetch_all(&NeedCriteria::for_orphanage(orphanage_id).by_priority())
            .await
    }

    pub async fn fetch_one(&self, id: &str) -> Outcome<Need> {
        fetch_first::<NeedDto, _>(&self.needs, by_id(id), "Need", "fetch need").await
    }

    /// Insert a need and read back the newest need with the same orphanage and item name.
    pub async fn create(&self, need: NewNeed) -> Outcome<Need> {
        self.needs
            .insert(&need)
            .await
            .map_err(|e| failed("create need", e))?;

        let query = Query::new()
            .eq("orphanage_id", &need.orphanage_id)
            .eq("item_name", &need.item_name)
            .order("created_at", SortDirection::Descending)
            .limit(1);
        fetch_first::<NeedDto, _>(&self.needs, query, "Need", "reload created need").await
    }

    /// Apply a partial update. An empty patch succeeds without a request.
    pub async fn update(&self, id: &str, patch: &NeedPatch) -> Outcome<()> {
        if patch.is_empty() {
            return Ok(());
        }
        self.needs
            .update(patch, &by_id(id))
            .await
            .map_err(|e| failed("update need", e))
    }

    pub async fn mark_fulfilled(&self, id: &str) -> Outcome<()> {
        let patch = NeedPatch {
            status: Some(NeedStatus::Fulfilled),
            ..NeedPatch::default()
        };
        self.update(id, &patch).await
    }

    /// Add `quantity` units to what has been fulfilled so far.
    ///
    /// The need flips to `Fulfilled` once the requested quantity is reached.
    /// Returns the need as it was written.
    pub async fn record_contribution(&self, id: &str, quantity: i32) -> Outcome<Need> {
        if quantity <= 0 {
            return Err(RepositoryError::new("Quantity must be greater than zero"));
        }
        let mut need = self.fetch_one(id).await?;
        need.quantity_fulfilled = need
            .quantity_fulfilled
            .saturating_add(quantity)
            .min(need.quantity);

        let mut patch = NeedPatch {
            quantity_fulfilled: Some(need.quantity_fulfilled),
            ..NeedPatch::default()
        };
        if need.remaining() == 0 && need.status == NeedStatus::Active {
            need.status = NeedStatus::Fulfilled;
            patch.status = Some(NeedStatus::Fulfilled);
        }
        self.update(id, &patch).await?;
        Ok(need)
    }

    pub async fn delete(&self, id: &str) -> Outcome<()> {
        self.needs
            .delete(&by_id(id))
            .await
            .map_err(|e| failed("delete need", e))
    }

    pub async fn fetch_categories(&self) -> Outcome<Vec<Category>> {
        let query = Query::new().order("name", SortDirection::Ascending);
        fetch_rows::<CategoryDto, _>(&self.categories, &query, "fetch categories").await
    }
}

/// Stable sort by urgency; ties keep the order the backend returned.
fn sort_by_priority(needs: &mut [Need], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => needs.sort_by_key(|n| n.priority),
        SortDirection::Descending => needs.sort_by(|a, b| b.priority.cmp(&a.priority)),
    }
}
