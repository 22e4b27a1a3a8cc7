//! Repositories: one per entity family, each a thin layer over the remote
//! client.
//!
//! Every method returns an [`Outcome`]. Remote failures are logged and
//! flattened into a [`RepositoryError`] message at this boundary; nothing
//! above a repository sees a [`RemoteError`].

mod admin;
mod auth;
mod donation;
mod error;
mod needs;
mod orphanage;
mod storage;

use serde::de::DeserializeOwned;

use crate::remote::{Query, RemoteError, SortDirection, TableClient};

pub use admin::{AdminRepository, DashboardStats};
pub use auth::{AuthRepository, SignUpRequest};
pub use donation::{DonationCriteria, DonationRepository, DonorTotals};
pub use error::{Outcome, RepositoryError, FALLBACK_MESSAGE};
pub use needs::{NeedCriteria, NeedsRepository};
pub use orphanage::{OrphanageCriteria, OrphanageRepository};
pub use storage::StorageRepository;

/// Table names.
pub mod tables {
    pub const USERS: &str = "users";
    pub const DONATIONS: &str = "donations";
    pub const NEEDS: &str = "needs";
    pub const ORPHANAGES: &str = "orphanages";
    pub const CATEGORIES: &str = "categories";
    pub const ACTIVITY_LOGS: &str = "activity_logs";
}

/// Ordering for a `fetch_all` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn by(column: &str, direction: SortDirection) -> Self {
        Self {
            column: column.to_string(),
            direction,
        }
    }

    fn apply(&self, query: Query) -> Query {
        query.order(&self.column, self.direction)
    }
}

impl Default for Sort {
    /// Newest first.
    fn default() -> Self {
        Self::by("created_at", SortDirection::Descending)
    }
}

/// Log a remote failure and turn it into a repository error.
pub(crate) fn failed(operation: &'static str, err: RemoteError) -> RepositoryError {
    tracing::warn!(operation, error = %err, "remote call failed");
    RepositoryError::from(err)
}

/// Select rows and map them through their DTO conversion.
pub(crate) async fn fetch_rows<D, R>(
    table: &TableClient,
    query: &Query,
    operation: &'static str,
) -> Outcome<Vec<R>>
where
    D: DeserializeOwned,
    R: From<D>,
{
    let rows: Vec<D> = table
        .select(query)
        .await
        .map_err(|e| failed(operation, e))?;
    Ok(rows.into_iter().map(R::from).collect())
}

/// First row matching `query`, or "`<entity>` not found".
pub(crate) async fn fetch_first<D, R>(
    table: &TableClient,
    query: Query,
    entity: &str,
    operation: &'static str,
) -> Outcome<R>
where
    D: DeserializeOwned,
    R: From<D>,
{
    fetch_rows::<D, R>(table, &query, operation)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| RepositoryError::not_found(entity))
}

/// Query selecting one row by primary key.
pub(crate) fn by_id(id: &str) -> Query {
    Query::new().eq("id", id)
}
