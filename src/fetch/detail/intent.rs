//! Intents for the single-entity fetch.

use crate::fetch::mvi::Intent;
use crate::schema::{EntityDetail, EntityKey};
use crate::source::TransportError;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A request for `key` numbered `generation` was issued.
    Start { key: EntityKey, generation: u64 },

    /// The request numbered `generation` finished.
    Settled {
        generation: u64,
        outcome: Result<Option<EntityDetail>, TransportError>,
    },

    /// Selection cleared; nothing is being fetched.
    Reset { generation: u64 },
}

impl Intent for DetailIntent {}
