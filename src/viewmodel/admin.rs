//! Admin screens: the user directory and the orphanage verification queue.

use async_trait::async_trait;

use super::list::{matches_search, FilterSet, ListHolder, ListSource};
use super::orphanages::OrphanageFilters;
use crate::domain::{OrphanageProfile, UserAccount, UserRole, VerificationStatus};
use crate::repository::{AdminRepository, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserFilters {
    pub role: Option<UserRole>,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserFilterChange {
    Role(Option<UserRole>),
    Search(String),
}

impl FilterSet for UserFilters {
    type Record = UserAccount;
    type Change = UserFilterChange;

    fn apply(&mut self, change: UserFilterChange) {
        match change {
            UserFilterChange::Role(role) => self.role = role,
            UserFilterChange::Search(search) => self.search = search,
        }
    }

    fn matches(&self, user: &UserAccount) -> bool {
        self.role.is_none_or(|r| user.role == r)
            && matches_search(
                &self.search,
                [Some(user.display_name.as_str()), Some(user.email.as_str())],
            )
    }
}

pub struct UsersSource {
    repository: AdminRepository,
}

#[async_trait]
impl ListSource for UsersSource {
    type Record = UserAccount;

    async fn load(&self) -> Outcome<Vec<UserAccount>> {
        self.repository.fetch_users(None).await
    }
}

pub type UsersViewModel = ListHolder<UsersSource, UserFilters>;

impl ListHolder<UsersSource, UserFilters> {
    pub fn with_repository(repository: AdminRepository) -> Self {
        ListHolder::new(UsersSource { repository })
    }

    pub async fn delete_user(&self, user_id: &str) -> bool {
        let repository = &self.source().repository;
        self.mutate(repository.delete_user(user_id), |_| "User deleted".to_string())
            .await
    }
}

pub struct PendingOrphanagesSource {
    repository: AdminRepository,
}

#[async_trait]
impl ListSource for PendingOrphanagesSource {
    type Record = OrphanageProfile;

    async fn load(&self) -> Outcome<Vec<OrphanageProfile>> {
        self.repository.fetch_pending_orphanages().await
    }
}

/// Orphanages awaiting review, oldest first.
pub type VerificationQueueViewModel = ListHolder<PendingOrphanagesSource, OrphanageFilters>;

impl ListHolder<PendingOrphanagesSource, OrphanageFilters> {
    pub fn with_repository(repository: AdminRepository) -> Self {
        ListHolder::new(PendingOrphanagesSource { repository })
    }

    pub async fn verify(&self, orphanage_id: &str) -> bool {
        self.review(orphanage_id, VerificationStatus::Verified, "Orphanage verified")
            .await
    }

    pub async fn reject(&self, orphanage_id: &str) -> bool {
        self.review(orphanage_id, VerificationStatus::Rejected, "Orphanage rejected")
            .await
    }

    async fn review(&self, orphanage_id: &str, status: VerificationStatus, message: &str) -> bool {
        let repository = &self.source().repository;
        self.mutate(repository.set_verification(orphanage_id, status), |_| {
            message.to_string()
        })
        .await
    }
}
