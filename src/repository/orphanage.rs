use super::{by_id, failed, fetch_first, fetch_rows, tables, Outcome, Sort};
use crate::domain::{OrphanageProfile, VerificationStatus};
use crate::dto::{NewOrphanage, OrphanageDto, OrphanagePatch};
use crate::remote::{Query, RemoteClient, SortDirection, TableClient};

/// Filters for [`OrphanageRepository::fetch_all`]. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrphanageCriteria {
    pub user_id: Option<String>,
    pub verification_status: Option<VerificationStatus>,
    pub city: Option<String>,
    pub min_rating: Option<f64>,
    pub sort: Sort,
    pub limit: Option<usize>,
}

impl OrphanageCriteria {
    pub fn verified() -> Self {
        Self {
            verification_status: Some(VerificationStatus::Verified),
            ..Self::default()
        }
    }

    fn to_query(&self) -> Query {
        let query = Query::new()
            .eq_opt("user_id", self.user_id.as_deref())
            .eq_opt("verification_status", self.verification_status)
            .eq_opt("city", self.city.as_deref())
            .gte_opt("rating", self.min_rating);
        let query = self.sort.apply(query);
        match self.limit {
            Some(limit) => query.limit(limit),
            None => query,
        }
    }
}

#[derive(Clone)]
pub struct OrphanageRepository {
    table: TableClient,
}

impl OrphanageRepository {
    pub fn new(client: &RemoteClient) -> Self {
        Self {
            table: client.table(tables::ORPHANAGES),
        }
    }

    pub async fn fetch_all(&self, criteria: &OrphanageCriteria) -> Outcome<Vec<OrphanageProfile>> {
        fetch_rows::<OrphanageDto, _>(&self.table, &criteria.to_query(), "fetch orphanages").await
    }

    pub async fn fetch_one(&self, id: &str) -> Outcome<OrphanageProfile> {
        fetch_first::<OrphanageDto, _>(&self.table, by_id(id), "Orphanage", "fetch orphanage")
            .await
    }

    /// The orphanage profile owned by an orphanage account.
    pub async fn fetch_for_user(&self, user_id: &str) -> Outcome<OrphanageProfile> {
        let query = Query::new().eq("user_id", user_id).limit(1);
        fetch_first::<OrphanageDto, _>(&self.table, query, "Orphanage", "fetch orphanage for user")
            .await
    }

    /// Insert a profile and read back the newest one for the same owner
    /// (or the same name when no owner is given).
    pub async fn create(&self, orphanage: NewOrphanage) -> Outcome<OrphanageProfile> {
        self.table
            .insert(&orphanage)
            .await
            .map_err(|e| failed("create orphanage", e))?;

        let query = match orphanage.user_id.as_deref() {
            Some(user_id) => Query::new().eq("user_id", user_id),
            None => Query::new().eq("name", &orphanage.name),
        }
        .order("created_at", SortDirection::Descending)
        .limit(1);
        fetch_first::<OrphanageDto, _>(&self.table, query, "Orphanage", "reload created orphanage")
            .await
    }

    /// Apply a partial update. An empty patch succeeds without a request.
    pub async fn update(&self, id: &str, patch: &OrphanagePatch) -> Outcome<()> {
        if patch.is_empty() {
            return Ok(());
        }
        self.table
            .update(patch, &by_id(id))
            .await
            .map_err(|e| failed("update orphanage", e))
    }

    pub async fn delete(&self, id: &str) -> Outcome<()> {
        self.table
            .delete(&by_id(id))
            .await
            .map_err(|e| failed("delete orphanage", e))
    }
}
