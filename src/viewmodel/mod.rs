//! View-state holders, one per screen.
//!
//! Each holder owns an immutable snapshot behind a `tokio::sync::watch`
//! channel. Presentation subscribes and re-renders on every replacement;
//! holders never render anything themselves.

pub mod admin;
pub mod auth;
pub mod donations;
pub mod list;
pub mod mvi;
pub mod needs;
pub mod orphanages;

pub use admin::{UserFilterChange, UserFilters, UsersViewModel, VerificationQueueViewModel};
pub use auth::{AuthIntent, AuthReducer, AuthState, AuthViewModel, CONFIRM_EMAIL_MESSAGE};
pub use donations::{DonationFilterChange, DonationFilters, DonationsViewModel};
pub use list::{FilterSet, ListHolder, ListSource, ListState};
pub use needs::{NeedFilterChange, NeedFilters, NeedsViewModel};
pub use orphanages::{OrphanageFilterChange, OrphanageFilters, OrphanagesViewModel};
