//! Entry point bundling the three read operations a view layer needs.

use std::borrow::Cow;
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::Config;
use crate::fetch::{CatalogService, CatalogView, DetailService, EntityView};
use crate::schema::{CatalogEntity, EntityKey};
use crate::source::{CachedSource, CatalogSource, GraphQlSource, QueryError};

/// One catalog screen's worth of data access.
///
/// Owns a list service and a detail service sharing the same source.
pub struct Session {
    catalog: CatalogService,
    detail: DetailService,
}

impl Session {
    /// Build a session over an injected source.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog: CatalogService::new(Arc::clone(&source)),
            detail: DetailService::new(source),
        }
    }

    /// Build a session over the configured GraphQL endpoint, with caching.
    pub fn from_config(config: &Config) -> Result<Self, QueryError> {
        let source = GraphQlSource::new(&config.endpoint)?;
        tracing::info!(endpoint = %source.endpoint(), "Catalog session created");
        Ok(Self::new(Arc::new(CachedSource::new(source))))
    }

    /// See [`CatalogService::fetch_catalog`].
    pub fn fetch_catalog(&self) -> CatalogView {
        self.catalog.fetch_catalog()
    }

    /// See [`DetailService::fetch_entity`].
    pub fn fetch_entity(&self, key: EntityKey) -> EntityView {
        self.detail.fetch_entity(key)
    }

    /// See [`crate::filter::filter`].
    pub fn filter<'a>(&self, items: &'a [CatalogEntity], term: &str) -> Cow<'a, [CatalogEntity]> {
        crate::filter::filter(items, term)
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn detail(&self) -> &DetailService {
        &self.detail
    }

    pub fn subscribe_catalog(&self) -> watch::Receiver<CatalogView> {
        self.catalog.subscribe()
    }

    pub fn subscribe_entity(&self) -> watch::Receiver<EntityView> {
        self.detail.subscribe()
    }
}
