//! The list-screen building block: a snapshot of loaded records, the
//! client-side filters over them and a holder that drives both.

mod filter;
mod holder;
mod intent;
mod reducer;
mod state;

pub use filter::{matches_search, FilterSet};
pub use holder::{ListHolder, ListSource};
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::ListState;
