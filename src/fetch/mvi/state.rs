//! Observable snapshot of a fetch.

/// A fetch result as callers see it at one instant.
///
/// Snapshots are cloned out to every caller and published through a watch
/// channel, so they must be cheap to clone and shareable across tasks.
/// Equality decides whether subscribers get woken.
pub trait FetchState: Clone + PartialEq + Default + Send + Sync + 'static {}
