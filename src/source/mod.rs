//! Query sources: the capability the fetch services read entities through.
//!
//! [`GraphQlSource`] talks to the remote endpoint; [`CachedSource`] wraps any
//! source with per-query memoisation and in-flight deduplication.

mod cache;
mod error;
mod graphql;
mod traits;

pub use cache::CachedSource;
pub use error::{QueryError, TransportError};
pub use graphql::{GraphQlSource, CATALOG_QUERY, CATALOG_QUERY_LIMITED, ENTITY_QUERY};
pub use traits::CatalogSource;
