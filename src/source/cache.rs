//! Memoising, deduplicating wrapper around another source.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::OnceCell;

use crate::schema::{CatalogEntity, EntityDetail, EntityKey};

use super::error::QueryError;
use super::traits::CatalogSource;

type Slot<T> = Arc<OnceCell<T>>;

/// Caches successful query results per query and variables.
///
/// Concurrent requests for the same query share a single upstream call.
/// Failures are not cached: the next caller retries. "Not found" results
/// are successful and are cached.
pub struct CachedSource<S> {
    inner: S,
    catalog: Mutex<Slot<Vec<CatalogEntity>>>,
    entities: Mutex<HashMap<EntityKey, Slot<Option<EntityDetail>>>>,
}

impl<S: CatalogSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            catalog: Mutex::new(Arc::new(OnceCell::new())),
            entities: Mutex::new(HashMap::new()),
        }
    }

    /// Get a reference to the wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop every memoised result.
    ///
    /// Requests already in flight complete into the discarded slots.
    pub fn clear(&self) {
        *self.catalog.lock() = Arc::new(OnceCell::new());
        self.entities.lock().clear();
        tracing::debug!(source = self.inner.name(), "Query cache cleared");
    }

    fn entity_slot(&self, key: &EntityKey) -> Slot<Option<EntityDetail>> {
        self.entities
            .lock()
            .entry(key.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachedSource<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogEntity>, QueryError> {
        let slot = self.catalog.lock().clone();
        if slot.initialized() {
            tracing::debug!(source = self.inner.name(), "Catalog served from cache");
        }
        slot.get_or_try_init(|| self.inner.list_catalog())
            .await
            .cloned()
    }

    async fn get_entity(&self, key: &EntityKey) -> Result<Option<EntityDetail>, QueryError> {
        if key.is_none() {
            return Err(QueryError::MissingKey);
        }

        let slot = self.entity_slot(key);
        if slot.initialized() {
            tracing::debug!(source = self.inner.name(), key = %key, "Entity served from cache");
        }
        slot.get_or_try_init(|| self.inner.get_entity(key))
            .await
            .cloned()
    }
}
