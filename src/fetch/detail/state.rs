//! State for the single-entity fetch.

use crate::fetch::mvi::FetchState;
use crate::schema::{EntityDetail, EntityKey};
use crate::source::TransportError;

/// What a caller sees of the detail fetch.
///
/// `entity` is `None` while loading, after a failure, and when nothing
/// matched. Check `loading`, then `error`, to tell those apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityView {
    pub entity: Option<EntityDetail>,
    pub loading: bool,
    pub error: Option<TransportError>,
    pub(super) key: EntityKey,
    pub(super) generation: u64,
}

impl FetchState for EntityView {}

impl EntityView {
    /// Key this view was requested with.
    pub fn key(&self) -> &EntityKey {
        &self.key
    }

    /// Sequence number of the request this view belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Settled without error and without a match.
    pub fn is_not_found(&self) -> bool {
        !self.loading && self.error.is_none() && self.entity.is_none() && !self.key.is_none()
    }
}
