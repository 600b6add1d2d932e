//! Identifier of the entity on the other side of a relationship edge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the related entity within a relationship collection.
///
/// Locally-created relationships get a [`RelatedId::generate`] id; the
/// submit boundary regenerates ids server-side as needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelatedId(String);

impl RelatedId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id for a locally-created relationship.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelatedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelatedId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RelatedId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
