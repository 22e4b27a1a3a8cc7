use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use super::filter::FilterSet;
use super::intent::ListIntent;
use super::reducer::ListReducer;
use super::state::ListState;
use crate::repository::Outcome;
use crate::viewmodel::mvi::Reducer;

/// Where a list screen's records come from.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Record: Clone + PartialEq + Send + Sync + 'static;

    async fn load(&self) -> Outcome<Vec<Self::Record>>;
}

/// Owns one list screen's snapshot and publishes every replacement.
///
/// Intents are plain `async fn`s: several may be in flight at once, and the
/// most recently issued `load` always wins.
pub struct ListHolder<S, F>
where
    S: ListSource,
    F: FilterSet<Record = S::Record>,
{
    source: S,
    state: watch::Sender<ListState<S::Record, F>>,
    sequence: AtomicU64,
}

impl<S, F> ListHolder<S, F>
where
    S: ListSource,
    F: FilterSet<Record = S::Record>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: watch::Sender::new(ListState::default()),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<S::Record, F>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ListState<S::Record, F> {
        self.state.borrow().clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn load(&self) {
        let token = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(ListIntent::LoadStarted { token });

        let intent = match self.source.load().await {
            Ok(items) => {
                tracing::debug!(token, count = items.len(), "list loaded");
                ListIntent::Loaded { token, items }
            }
            Err(err) => ListIntent::LoadFailed {
                token,
                error: err.into_message(),
            },
        };
        self.dispatch(intent);
    }

    /// Change one filter dimension. No remote call.
    pub fn set_filter(&self, change: F::Change) {
        self.dispatch(ListIntent::SetFilter(change));
    }

    pub fn clear_messages(&self) {
        self.dispatch(ListIntent::ClearMessages);
    }

    /// Run a repository mutation; on success publish `success` and reload.
    ///
    /// Returns whether the mutation succeeded. Data is never patched locally.
    pub async fn mutate<T, Fut, M>(&self, operation: Fut, success: M) -> bool
    where
        Fut: Future<Output = Outcome<T>> + Send,
        M: FnOnce(T) -> String + Send,
    {
        match operation.await {
            Ok(value) => {
                self.dispatch(ListIntent::MutationSucceeded {
                    message: success(value),
                });
                self.load().await;
                true
            }
            Err(err) => {
                self.dispatch(ListIntent::MutationFailed {
                    error: err.into_message(),
                });
                false
            }
        }
    }

    fn dispatch(&self, intent: ListIntent<S::Record, F>) {
        self.state.send_modify(|state| {
            *state = ListReducer::<S::Record, F>::reduce(std::mem::take(state), intent);
        });
    }
}
