use std::marker::PhantomData;

use super::filter::FilterSet;
use super::intent::ListIntent;
use super::state::ListState;
use crate::viewmodel::mvi::Reducer;

pub struct ListReducer<R, F>(PhantomData<fn() -> (R, F)>);

impl<R, F> Reducer for ListReducer<R, F>
where
    R: Clone + PartialEq + Send + Sync + 'static,
    F: FilterSet<Record = R>,
{
    type State = ListState<R, F>;
    type Intent = ListIntent<R, F>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::LoadStarted { token } => ListState {
                is_loading: true,
                error: None,
                latest_load: token.max(state.latest_load),
                ..state
            },

            ListIntent::Loaded { token, .. } | ListIntent::LoadFailed { token, .. }
                if token < state.latest_load =>
            {
                state
            }

            ListIntent::Loaded { items, .. } => {
                let filtered = state.filters.select(&items);
                ListState {
                    is_loading: false,
                    items,
                    filtered,
                    ..state
                }
            }

            ListIntent::LoadFailed { error, .. } => ListState {
                is_loading: false,
                error: Some(error),
                ..state
            },

            ListIntent::SetFilter(change) => {
                let mut filters = state.filters.clone();
                filters.apply(change);
                let filtered = filters.select(&state.items);
                ListState {
                    filters,
                    filtered,
                    ..state
                }
            }

            ListIntent::MutationSucceeded { message } => ListState {
                error: None,
                success_message: Some(message),
                ..state
            },

            ListIntent::MutationFailed { error } => ListState {
                error: Some(error),
                success_message: None,
                ..state
            },

            ListIntent::ClearMessages => ListState {
                error: None,
                success_message: None,
                ..state
            },
        }
    }
}
