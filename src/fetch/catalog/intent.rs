//! Intents for the catalog fetch.

use crate::fetch::mvi::Intent;
use crate::schema::CatalogEntity;
use crate::source::TransportError;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A request numbered `generation` was issued.
    Start { generation: u64 },

    /// The request numbered `generation` finished.
    Settled {
        generation: u64,
        outcome: Result<Vec<CatalogEntity>, TransportError>,
    },
}

impl Intent for CatalogIntent {}
