use chrono::{DateTime, Utc};

use super::{by_id, failed, fetch_first, fetch_rows, tables, Outcome, RepositoryError, Sort};
use crate::domain::{DonationRecord, DonationStatus, DonationType};
use crate::dto::{DonationDto, DonationPatch, NewDonation};
use crate::remote::{Query, RemoteClient, SortDirection, TableClient};

/// Filters for [`DonationRepository::fetch_all`]. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationCriteria {
    pub donor_id: Option<String>,
    pub orphanage_id: Option<String>,
    pub status: Option<DonationStatus>,
    pub donation_type: Option<DonationType>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub sort: Sort,
    pub limit: Option<usize>,
}

impl DonationCriteria {
    pub fn for_donor(donor_id: impl Into<String>) -> Self {
        Self {
            donor_id: Some(donor_id.into()),
            ..Self::default()
        }
    }

    pub fn for_orphanage(orphanage_id: impl Into<String>) -> Self {
        Self {
            orphanage_id: Some(orphanage_id.into()),
            ..Self::default()
        }
    }

    fn to_query(&self) -> Query {
        let query = Query::new()
            .eq_opt("donor_id", self.donor_id.as_deref())
            .eq_opt("orphanage_id", self.orphanage_id.as_deref())
            .eq_opt("status", self.status)
            .eq_opt("donation_type", self.donation_type)
            .gte_opt("created_at", self.created_from.map(|t| t.to_rfc3339()))
            .lte_opt("created_at", self.created_to.map(|t| t.to_rfc3339()));
        let query = self.sort.apply(query);
        match self.limit {
            Some(limit) => query.limit(limit),
            None => query,
        }
    }
}

/// Aggregates over one donor's donations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorTotals {
    pub donation_count: usize,
    pub completed_count: usize,
    /// Sum of `amount` over completed monetary donations.
    pub total_amount: f64,
}

#[derive(Clone)]
pub struct DonationRepository {
    table: TableClient,
}

impl DonationRepository {
    pub fn new(client: &RemoteClient) -> Self {
        Self {
            table: client.table(tables::DONATIONS),
        }
    }

    pub async fn fetch_all(&self, criteria: &DonationCriteria) -> Outcome<Vec<DonationRecord>> {
        fetch_rows::<DonationDto, _>(&self.table, &criteria.to_query(), "fetch donations").await
    }

    pub async fn fetch_for_donor(&self, donor_id: &str) -> Outcome<Vec<DonationRecord>> {
        self.fetch_all(&DonationCriteria::for_donor(donor_id)).await
    }

    pub async fn fetch_for_orphanage(&self, orphanage_id: &str) -> Outcome<Vec<DonationRecord>> {
        self.fetch_all(&DonationCriteria::for_orphanage(orphanage_id))
            .await
    }

    pub async fn fetch_one(&self, id: &str) -> Outcome<DonationRecord> {
        fetch_first::<DonationDto, _>(&self.table, by_id(id), "Donation", "fetch donation").await
    }

    /// Insert a donation and return it as stored.
    ///
    /// The insert does not echo the row, so the newest donation for the same
    /// donor and orphanage is read back. Two identical donations created at
    /// the same moment can therefore each receive the other's row.
    pub async fn create(&self, donation: NewDonation) -> Outcome<DonationRecord> {
        self.table
            .insert(&donation)
            .await
            .map_err(|e| failed("create donation", e))?;

        let query = Query::new()
            .eq("donor_id", &donation.donor_id)
            .eq("orphanage_id", &donation.orphanage_id)
            .order("created_at", SortDirection::Descending)
            .limit(1);
        fetch_first::<DonationDto, _>(&self.table, query, "Donation", "reload created donation")
            .await
    }

    /// Apply a partial update. An empty patch succeeds without a request.
    pub async fn update(&self, id: &str, patch: &DonationPatch) -> Outcome<()> {
        if patch.is_empty() {
            return Ok(());
        }
        self.table
            .update(patch, &by_id(id))
            .await
            .map_err(|e| failed("update donation", e))
    }

    /// Set the status, stamping `completed_at` when it becomes `Completed`.
    ///
    /// Any status may be written from any other; the lifecycle in
    /// [`DonationStatus::next_states`] is not enforced here.
    pub async fn update_status(&self, id: &str, status: DonationStatus) -> Outcome<()> {
        let patch = DonationPatch {
            status: Some(status),
            completed_at: (status == DonationStatus::Completed).then(Utc::now),
            ..DonationPatch::default()
        };
        self.update(id, &patch).await
    }

    /// Delete a donation that is still pending.
    ///
    /// The record is read first; anything past `Pending` is refused without
    /// issuing the delete.
    pub async fn delete(&self, id: &str) -> Outcome<()> {
        let donation = self.fetch_one(id).await?;
        if !donation.status.is_deletable() {
            return Err(RepositoryError::new(format!(
                "Only pending donations can be deleted (this one is {})",
                donation.status
            )));
        }
        self.table
            .delete(&by_id(id))
            .await
            .map_err(|e| failed("delete donation", e))
    }

    pub async fn donor_totals(&self, donor_id: &str) -> Outcome<DonorTotals> {
        let donations = self.fetch_for_donor(donor_id).await?;
        Ok(totals(&donations))
    }
}

fn totals(donations: &[DonationRecord]) -> DonorTotals {
    let completed: Vec<&DonationRecord> = donations
        .iter()
        .filter(|d| d.status == DonationStatus::Completed)
        .collect();
    DonorTotals {
        donation_count: donations.len(),
        completed_count: completed.len(),
        total_amount: completed
            .iter()
            .filter(|d| d.donation_type == DonationType::Monetary)
            .filter_map(|d| d.amount)
            .sum(),
    }
}
