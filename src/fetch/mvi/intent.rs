//! Events that move a fetch forward.

/// Something that happened to a fetch.
///
/// Either the caller asked for data (start, reset) or the source answered.
/// A [`Reducer`](super::Reducer) folds each one into the next state.
pub trait Intent: Send + 'static {}
