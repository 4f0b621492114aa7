//! Observable state container driven by a reducer.

use std::marker::PhantomData;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds the latest state for reducer `R` and publishes every change.
pub struct Store<R: Reducer> {
    state: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(R::State::default());
        Self {
            state,
            _reducer: PhantomData,
        }
    }

    /// Run `intent` through the reducer.
    ///
    /// Returns `true` if the state changed and subscribers were notified.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.state.send_if_modified(|current| {
            let next = R::reduce(current.clone(), intent);
            if next == *current {
                false
            } else {
                *current = next;
                true
            }
        })
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Receiver that observes every subsequent state change.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }

    /// Wait until the state satisfies `ready`, returning that state.
    pub async fn wait_for(&self, ready: impl FnMut(&R::State) -> bool) -> R::State {
        let mut receiver = self.state.subscribe();
        let state = match receiver.wait_for(ready).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.snapshot(),
        };
        state
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
