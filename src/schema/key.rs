use std::fmt;

use super::entity::EntityId;

/// How a single entity is addressed for a detail lookup.
///
/// Exactly one lookup key, or none at all. `None` means "nothing selected":
/// no request is issued for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EntityKey {
    ById(EntityId),
    ByName(String),
    #[default]
    None,
}

impl EntityKey {
    /// Build a key from the optional `(id, name)` pair used by callers that
    /// still think in terms of two optional parameters.
    ///
    /// When both are given the identifier wins and the name is dropped; the
    /// remote API defines no precedence between the two.
    pub fn from_parts(id: Option<EntityId>, name: Option<String>) -> Self {
        match (id, name) {
            (Some(id), Some(name)) => {
                tracing::warn!(
                    id = %id,
                    name = %name,
                    "Both id and name supplied for entity lookup, using id"
                );
                EntityKey::ById(id)
            }
            (Some(id), None) => EntityKey::ById(id),
            (None, Some(name)) => EntityKey::ByName(name),
            (None, None) => EntityKey::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EntityKey::None)
    }

    /// The `(id, name)` query variables for this key.
    pub fn as_parts(&self) -> (Option<&str>, Option<&str>) {
        match self {
            EntityKey::ById(id) => (Some(id.as_str()), None),
            EntityKey::ByName(name) => (None, Some(name.as_str())),
            EntityKey::None => (None, None),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::ById(id) => write!(f, "id:{}", id),
            EntityKey::ByName(name) => write!(f, "name:{}", name),
            EntityKey::None => f.write_str("none"),
        }
    }
}
