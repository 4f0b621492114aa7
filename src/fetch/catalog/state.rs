//! State for the catalog fetch.

use std::sync::Arc;

use crate::fetch::mvi::FetchState;
use crate::schema::CatalogEntity;
use crate::source::TransportError;

/// What a caller sees of the catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Entities in server order. Empty while loading or after a failure.
    pub items: Arc<[CatalogEntity]>,
    pub loading: bool,
    /// Set when the last request failed.
    pub error: Option<TransportError>,
    pub(super) generation: u64,
}

impl FetchState for CatalogView {}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl CatalogView {
    /// Sequence number of the request this view belongs to. Zero until the
    /// first request starts.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn started(&self) -> bool {
        self.generation > 0
    }
}
