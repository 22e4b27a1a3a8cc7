use super::filter::FilterSet;
use crate::viewmodel::mvi::Intent;

pub enum ListIntent<R, F: FilterSet> {
    /// A load with this token was issued.
    LoadStarted { token: u64 },
    Loaded { token: u64, items: Vec<R> },
    LoadFailed { token: u64, error: String },
    SetFilter(F::Change),
    MutationSucceeded { message: String },
    MutationFailed { error: String },
    ClearMessages,
}

impl<R: Send + 'static, F: FilterSet> Intent for ListIntent<R, F> {}
