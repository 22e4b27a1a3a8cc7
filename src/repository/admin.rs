use serde::Serialize;

use super::{by_id, failed, fetch_rows, tables, Outcome};
use crate::domain::{actions, ActivityLogEntry, OrphanageProfile, UserAccount, UserRole, VerificationStatus};
use crate::dto::{ActivityLogDto, IdRow, NewActivityLog, OrphanageDto, OrphanagePatch, UserDto};
use crate::remote::{Query, RemoteClient, SortDirection, TableClient};

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_orphanages: usize,
    pub pending_verifications: usize,
    pub total_donations: usize,
}

#[derive(Clone)]
pub struct AdminRepository {
    client: RemoteClient,
    users: TableClient,
    orphanages: TableClient,
    donations: TableClient,
    activity: TableClient,
}

impl AdminRepository {
    pub fn new(client: &RemoteClient) -> Self {
        Self {
            client: client.clone(),
            users: client.table(tables::USERS),
            orphanages: client.table(tables::ORPHANAGES),
            donations: client.table(tables::DONATIONS),
            activity: client.table(tables::ACTIVITY_LOGS),
        }
    }

    pub async fn fetch_users(&self, role: Option<UserRole>) -> Outcome<Vec<UserAccount>> {
        let query = Query::new()
            .eq_opt("role", role)
            .order("created_at", SortDirection::Descending);
        fetch_rows::<UserDto, _>(&self.users, &query, "fetch users").await
    }

    /// Delete a user's profile row.
    pub async fn delete_user(&self, user_id: &str) -> Outcome<()> {
        self.users
            .delete(&by_id(user_id))
            .await
            .map_err(|e| failed("delete user", e))?;
        self.record(actions::USER_DELETED, "user", user_id, format!("Deleted user {}", user_id))
            .await;
        Ok(())
    }

    /// Orphanages awaiting review, oldest first.
    pub async fn fetch_pending_orphanages(&self) -> Outcome<Vec<OrphanageProfile>> {
        let query = Query::new()
            .eq("verification_status", VerificationStatus::Pending)
            .order("created_at", SortDirection::Ascending);
        fetch_rows::<OrphanageDto, _>(&self.orphanages, &query, "fetch pending orphanages").await
    }

    /// Set an orphanage's verification status and note it in the activity log.
    pub async fn set_verification(&self, orphanage_id: &str, status: VerificationStatus) -> Outcome<()> {
        let patch = OrphanagePatch {
            verification_status: Some(status),
            ..OrphanagePatch::default()
        };
        self.orphanages
            .update(&patch, &by_id(orphanage_id))
            .await
            .map_err(|e| failed("set verification", e))?;

        let action = match status {
            VerificationStatus::Rejected => actions::ORPHANAGE_REJECTED,
            _ => actions::ORPHANAGE_VERIFIED,
        };
        self.record(
            action,
            "orphanage",
            orphanage_id,
            format!("Orphanage {} marked {}", orphanage_id, status),
        )
        .await;
        Ok(())
    }

    pub async fn fetch_activity(&self, limit: usize) -> Outcome<Vec<ActivityLogEntry>> {
        let query = Query::new()
            .order("created_at", SortDirection::Descending)
            .limit(limit);
        fetch_rows::<ActivityLogDto, _>(&self.activity, &query, "fetch activity").await
    }

    /// Append an entry to the activity log.
    pub async fn log_activity(&self, entry: &NewActivityLog) -> Outcome<()> {
        self.activity
            .insert(entry)
            .await
            .map_err(|e| failed("log activity", e))
    }

    pub async fn dashboard_stats(&self) -> Outcome<DashboardStats> {
        let ids = Query::new().select("id");
        let pending = Query::new()
            .select("id")
            .eq("verification_status", VerificationStatus::Pending);

        let (users, orphanages, pending, donations) = tokio::try_join!(
            self.users.select::<IdRow>(&ids),
            self.orphanages.select::<IdRow>(&ids),
            self.orphanages.select::<IdRow>(&pending),
            self.donations.select::<IdRow>(&ids),
        )
        .map_err(|e| failed("dashboard stats", e))?;

        Ok(DashboardStats {
            total_users: users.len(),
            total_orphanages: orphanages.len(),
            pending_verifications: pending.len(),
            total_donations: donations.len(),
        })
    }

    /// Best-effort audit entry attributed to the signed-in admin.
    ///
    /// Skipped without a session; a failed write is logged and ignored so it
    /// never turns a successful admin action into an error.
    async fn record(&self, action: &str, target_type: &str, target_id: &str, description: String) {
        let Some(actor_id) = self.client.session().user_id() else {
            return;
        };
        let entry = NewActivityLog {
            actor_id,
            action_type: action.to_string(),
            target_type: target_type.to_string(),
            target_id: Some(target_id.to_string()),
            description,
        };
        if let Err(err) = self.log_activity(&entry).await {
            tracing::warn!(action, error = %err, "activity log write failed");
        }
    }
}
