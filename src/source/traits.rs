//! Core trait for catalog query sources.

use async_trait::async_trait;

use crate::schema::{CatalogEntity, EntityDetail, EntityKey};

use super::error::QueryError;

/// Capability for reading catalog data from somewhere.
///
/// Implementations are handed to the fetch services as
/// `Arc<dyn CatalogSource>`; the services never reach for a global client.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the full catalog in server order.
    async fn list_catalog(&self) -> Result<Vec<CatalogEntity>, QueryError>;

    /// Fetch one entity.
    ///
    /// `Ok(None)` means the query succeeded but nothing matched the key.
    /// Implementations must not issue a request for [`EntityKey::None`].
    async fn get_entity(&self, key: &EntityKey) -> Result<Option<EntityDetail>, QueryError>;
}
