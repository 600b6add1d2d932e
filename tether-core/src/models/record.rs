//! A single relationship edge with its denormalized display snapshot.

use serde::{Deserialize, Serialize};

use super::related_id::RelatedId;
use super::relation_kind::RelationKind;

/// Display fields of the related entity, denormalized so a list row can be
/// rendered without an extra fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl EntitySnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
        }
    }
}

/// One edge in a many-to-many relationship collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub related_id: RelatedId,
    pub kind: RelationKind,
    pub snapshot: EntitySnapshot,
}

impl RelationshipRecord {
    pub fn new(related_id: impl Into<RelatedId>, kind: RelationKind, name: impl Into<String>) -> Self {
        Self {
            related_id: related_id.into(),
            kind,
            snapshot: EntitySnapshot::new(name),
        }
    }
}
