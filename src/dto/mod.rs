//! Wire-shaped rows and write payloads.
//!
//! `*Dto` types decode rows exactly as the backend returns them; each has a
//! pure `From<Dto>` conversion into its domain record that fills in every
//! optional column's default. `New*` and `*Patch` types are the insert and
//! update bodies; absent optional fields are skipped, never sent as `null`.

mod activity;
mod category;
mod donation;
mod need;
mod orphanage;
pub(crate) mod timestamp;
mod user;

use serde::Deserialize;

pub use activity::{ActivityLogDto, NewActivityLog};
pub use category::CategoryDto;
pub use donation::{DonationDto, DonationPatch, NewDonation};
pub use need::{NeedDto, NeedPatch, NewNeed};
pub use orphanage::{NewOrphanage, OrphanageDto, OrphanagePatch};
pub use user::{NewUserProfile, UserDto, UserPatch};

/// Projection used when only row ids are needed (counts, existence).
#[derive(Debug, Clone, Deserialize)]
pub struct IdRow {
    pub id: String,
}
