//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ watch channel ──→ presentation
//!    ↑                                                   │
//!    └───────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one screen
//! - **Intent**: a user action or the result of a repository call
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
