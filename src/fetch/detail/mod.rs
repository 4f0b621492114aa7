//! Detail Fetch Service: one entity as an `{entity, loading, error}` view.

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::fetch::mvi::Store;
use crate::schema::EntityKey;
use crate::source::CatalogSource;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::EntityView;

/// Fetches a single entity for the currently selected key.
///
/// Changing the key cancels the previous request and any response that
/// still arrives for it is discarded: the last key wins.
pub struct DetailService {
    source: Arc<dyn CatalogSource>,
    store: Arc<Store<DetailReducer>>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl DetailService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            store: Arc::new(Store::new()),
            in_flight: Mutex::new(None),
        }
    }

    /// Select `key` and return the current view for it.
    ///
    /// - Same key as the active one: no new request.
    /// - Different key: the view goes back to loading and a request is issued.
    /// - [`EntityKey::None`]: anything in flight is cancelled and the idle
    ///   view is returned; the source is not called.
    pub fn fetch_entity(&self, key: EntityKey) -> EntityView {
        let mut in_flight = self.in_flight.lock();
        let current = self.store.snapshot();
        if *current.key() == key {
            return current;
        }

        self.start(&mut in_flight, key, current.generation() + 1);
        self.store.snapshot()
    }

    /// Re-issue the request for the active key, e.g. after a failure.
    pub fn refetch(&self) -> EntityView {
        let mut in_flight = self.in_flight.lock();
        let current = self.store.snapshot();
        if !current.key().is_none() {
            self.start(&mut in_flight, current.key().clone(), current.generation() + 1);
        }
        self.store.snapshot()
    }

    /// Current view without starting anything.
    pub fn snapshot(&self) -> EntityView {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<EntityView> {
        self.store.subscribe()
    }

    /// Wait for the active key's request to settle.
    pub async fn settled(&self) -> EntityView {
        self.store.wait_for(|view| !view.loading).await
    }

    fn start(&self, in_flight: &mut Option<AbortHandle>, key: EntityKey, generation: u64) {
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        if key.is_none() {
            self.store.dispatch(DetailIntent::Reset { generation });
            return;
        }

        self.store.dispatch(DetailIntent::Start {
            key: key.clone(),
            generation,
        });

        tracing::debug!(source = self.source.name(), key = %key, generation, "Fetching entity");

        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let request_key = key.clone();
        let handle = super::spawn_request(
            async move { source.get_entity(&request_key).await },
            move |outcome| {
                match &outcome {
                    Ok(Some(_)) => tracing::info!(key = %key, generation, "Entity fetched"),
                    Ok(None) => tracing::info!(key = %key, generation, "Entity not found"),
                    Err(err) => {
                        tracing::warn!(key = %key, error = %err, generation, "Entity fetch failed")
                    }
                }
                if !store.dispatch(DetailIntent::Settled { generation, outcome }) {
                    tracing::debug!(key = %key, generation, "Discarded stale entity response");
                }
            },
        );
        *in_flight = Some(handle);
    }
}

impl Drop for DetailService {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.lock().take() {
            handle.abort();
        }
    }
}
