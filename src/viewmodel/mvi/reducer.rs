use super::intent::Intent;
use super::state::UiState;

/// The only place a snapshot changes.
///
/// Must be pure: side effects (repository calls, publishing) belong to the
/// holder that dispatches the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
