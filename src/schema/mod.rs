//! Catalog entity shapes as served by the remote query API.
//!
//! Entities are value objects: they are decoded verbatim from a query
//! response and never mutated locally.

mod category;
mod entity;
mod key;

pub use category::{tag_color, Category, DEFAULT_TAG_COLOR};
pub use entity::{CatalogEntity, EntityDetail, EntityId, Range};
pub use key::EntityKey;
