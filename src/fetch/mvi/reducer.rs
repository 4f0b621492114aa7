//! Pure state transitions for a fetch.

use super::intent::Intent;
use super::state::FetchState;

/// Computes the next fetch state from the current one and an event.
///
/// Staleness checks live here: a reducer decides whether a settling
/// response still belongs to the active request.
pub trait Reducer {
    type State: FetchState;

    type Intent: Intent;

    /// `(State, Intent) -> State`, with no I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
