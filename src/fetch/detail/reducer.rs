//! Reducer for the single-entity fetch.

use crate::fetch::mvi::Reducer;
use crate::schema::EntityKey;

use super::intent::DetailIntent;
use super::state::EntityView;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = EntityView;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Start { key, generation } => EntityView {
                entity: None,
                loading: true,
                error: None,
                key,
                generation,
            },

            DetailIntent::Reset { generation } => EntityView {
                entity: None,
                loading: false,
                error: None,
                key: EntityKey::None,
                generation,
            },

            DetailIntent::Settled {
                generation,
                outcome,
            } => {
                // A response for a superseded key must not touch the view.
                if generation != state.generation || !state.loading {
                    return state;
                }

                let (entity, error) = match outcome {
                    Ok(entity) => (entity, None),
                    Err(error) => (None, Some(error)),
                };
                EntityView {
                    entity,
                    loading: false,
                    error,
                    ..state
                }
            }
        }
    }
}
