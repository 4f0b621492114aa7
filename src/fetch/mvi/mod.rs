//! State / Intent / Reducer primitives for asynchronous fetch results.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                │
//!    └──────── source task ───────────┘
//! ```
//!
//! - **State**: Immutable snapshot of a fetch (loading / settled / failed)
//! - **Intent**: A request starting, a response settling, a reset
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Holds the latest state and notifies subscribers on change

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::FetchState;
pub use store::Store;
