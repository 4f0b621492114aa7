//! Reducer for the catalog fetch.

use std::sync::Arc;

use crate::fetch::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::CatalogView;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogView;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Start { generation } => CatalogView {
                items: Arc::from(Vec::new()),
                loading: true,
                error: None,
                generation,
            },

            CatalogIntent::Settled {
                generation,
                outcome,
            } => {
                // Only the most recent request may settle the view.
                if generation != state.generation || !state.loading {
                    return state;
                }

                match outcome {
                    Ok(items) => CatalogView {
                        items: Arc::from(items),
                        loading: false,
                        error: None,
                        generation,
                    },
                    Err(error) => CatalogView {
                        items: Arc::from(Vec::new()),
                        loading: false,
                        error: Some(error),
                        generation,
                    },
                }
            }
        }
    }
}
