//! Domain records mirroring the backend's tables.
//!
//! Records are transient copies of remote rows; identity is the row id.

mod activity;
mod category;
mod donation;
mod need;
mod orphanage;
mod user;

pub use activity::{actions, ActivityLogEntry};
pub use category::Category;
pub use donation::{DonationRecord, DonationStatus, DonationType};
pub use need::{Need, NeedPriority, NeedStatus};
pub use orphanage::{OrphanageProfile, VerificationStatus};
pub use user::{UserAccount, UserRole};
