use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::EntityKey;

/// Opaque, stable identifier of one catalog entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// List projection of a catalog entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntity {
    pub id: EntityId,
    /// Catalog number, digits only. Several forms may share one number.
    pub number: String,
    pub name: String,
    #[serde(rename = "image")]
    pub image_url: String,
    /// Category tags in display order.
    pub types: Vec<String>,
}

impl CatalogEntity {
    /// Key used to open this entity's detail view.
    ///
    /// Names are lower-cased the way list navigation addresses them.
    pub fn detail_key(&self) -> EntityKey {
        EntityKey::ByName(self.name.to_lowercase())
    }
}

/// A `{minimum, maximum}` pair of unit-bearing measurement strings.
///
/// Values such as `"0.61m"` are kept as served, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    pub minimum: String,
    pub maximum: String,
}

/// Detail projection: everything in [`CatalogEntity`] plus the stat block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetail {
    #[serde(flatten)]
    pub summary: CatalogEntity,
    pub classification: String,
    pub resistant: Vec<String>,
    pub weaknesses: Vec<String>,
    #[serde(rename = "fleeRate")]
    pub flee_rate: f64,
    #[serde(rename = "maxCP")]
    pub max_cp: u32,
    #[serde(rename = "maxHP")]
    pub max_hp: u32,
    pub height: Range,
    pub weight: Range,
}

impl EntityDetail {
    pub fn id(&self) -> &EntityId {
        &self.summary.id
    }

    pub fn name(&self) -> &str {
        &self.summary.name
    }
}
