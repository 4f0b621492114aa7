//! Data access and filtering for a browsable creature catalog.
//!
//! - [`schema`]: entity shapes as served by the query API
//! - [`source`]: the injected query capability and its GraphQL adapter
//! - [`fetch`]: list and detail services exposing tri-state views
//! - [`filter`]: keystroke-speed search over a fetched list

pub mod config;
pub mod fetch;
pub mod filter;
pub mod schema;
pub mod session;
pub mod source;
pub mod telemetry;

pub use fetch::{CatalogService, CatalogView, DetailService, EntityView};
pub use schema::{CatalogEntity, EntityDetail, EntityId, EntityKey};
pub use session::Session;
pub use source::{CachedSource, CatalogSource, GraphQlSource, QueryError, TransportError};
