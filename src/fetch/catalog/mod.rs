//! List Fetch Service: the full catalog as a `{items, loading}` view.

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::fetch::mvi::Store;
use crate::source::CatalogSource;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::CatalogView;

/// Fetches the catalog once per service instance.
///
/// Repeat calls return the current view without issuing new requests;
/// deduplication across instances is the source's business.
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    store: Arc<Store<CatalogReducer>>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            store: Arc::new(Store::new()),
            in_flight: Mutex::new(None),
        }
    }

    /// Current catalog view, starting the request on first use.
    ///
    /// While in flight, `items` is empty and `loading` is true.
    pub fn fetch_catalog(&self) -> CatalogView {
        let mut in_flight = self.in_flight.lock();
        if !self.store.snapshot().started() {
            self.start(&mut in_flight);
        }
        self.store.snapshot()
    }

    /// Re-issue the catalog request, discarding any in-flight one.
    pub fn refetch(&self) -> CatalogView {
        let mut in_flight = self.in_flight.lock();
        self.start(&mut in_flight);
        self.store.snapshot()
    }

    /// Current view without starting anything.
    pub fn snapshot(&self) -> CatalogView {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogView> {
        self.store.subscribe()
    }

    /// Wait for the current request to settle.
    pub async fn settled(&self) -> CatalogView {
        self.store.wait_for(|view| !view.loading).await
    }

    fn start(&self, in_flight: &mut Option<AbortHandle>) {
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        let generation = self.store.snapshot().generation() + 1;
        self.store.dispatch(CatalogIntent::Start { generation });

        tracing::debug!(source = self.source.name(), generation, "Fetching catalog");

        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let handle = super::spawn_request(
            async move { source.list_catalog().await },
            move |outcome| {
                match &outcome {
                    Ok(items) => tracing::info!(count = items.len(), generation, "Catalog fetched"),
                    Err(err) => tracing::warn!(error = %err, generation, "Catalog fetch failed"),
                }
                if !store.dispatch(CatalogIntent::Settled { generation, outcome }) {
                    tracing::debug!(generation, "Discarded stale catalog response");
                }
            },
        );
        *in_flight = Some(handle);
    }
}

impl Drop for CatalogService {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.lock().take() {
            handle.abort();
        }
    }
}
