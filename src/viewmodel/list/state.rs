use super::filter::FilterSet;
use crate::viewmodel::mvi::UiState;

/// Snapshot of a list screen.
///
/// `filtered` is always `items` passed through `filters`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R, F> {
    pub is_loading: bool,
    pub items: Vec<R>,
    pub filtered: Vec<R>,
    pub filters: F,
    pub error: Option<String>,
    pub success_message: Option<String>,
    /// Token of the newest issued load; completions of older loads are dropped.
    pub latest_load: u64,
}

impl<R, F: Default> Default for ListState<R, F> {
    fn default() -> Self {
        Self {
            is_loading: false,
            items: Vec::new(),
            filtered: Vec::new(),
            filters: F::default(),
            error: None,
            success_message: None,
            latest_load: 0,
        }
    }
}

impl<R, F> UiState for ListState<R, F>
where
    R: Clone + PartialEq + Send + Sync + 'static,
    F: FilterSet<Record = R>,
{
}

impl<R, F> ListState<R, F> {
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn has_message(&self) -> bool {
        self.error.is_some() || self.success_message.is_some()
    }
}
