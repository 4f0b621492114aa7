//! Fetch services: tri-state views over a [`CatalogSource`].
//!
//! Each service owns one logical request at a time. Callers read the
//! current state synchronously and observe transitions through a
//! `tokio::sync::watch` subscription. Transport failures end up in the
//! state's `error` field; nothing is thrown across this boundary.
//!
//! All service methods must be called from within a Tokio runtime.
//!
//! [`CatalogSource`]: crate::source::CatalogSource

pub mod catalog;
pub mod detail;
pub mod mvi;

use std::future::Future;

use tokio::task::AbortHandle;

use crate::source::{QueryError, TransportError};

pub use catalog::{CatalogService, CatalogView};
pub use detail::{DetailService, EntityView};

/// Run `request` on the runtime and hand its normalised outcome to `settle`.
///
/// The returned handle cancels the request; a cancelled request never calls
/// `settle`. A panicking request settles as a `task_failed` error.
fn spawn_request<T, F, S>(request: F, settle: S) -> AbortHandle
where
    T: Send + 'static,
    F: Future<Output = Result<T, QueryError>> + Send + 'static,
    S: FnOnce(Result<T, TransportError>) + Send + 'static,
{
    let request = tokio::spawn(request);
    let abort = request.abort_handle();

    tokio::spawn(async move {
        let outcome = match request.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(TransportError::from(&err)),
            Err(join_err) if join_err.is_cancelled() => return,
            Err(join_err) => Err(TransportError::new("task_failed", join_err.to_string())),
        };
        settle(outcome);
    });

    abort
}
