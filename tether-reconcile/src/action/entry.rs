//! Pending-mutation variants for the action log.
//!
//! Uses `#[serde(tag = "type", content = "data")]` for a clean tagged JSON
//! representation when pending edits cross a serialization boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tether_core::{RecordPatch, RelationshipRecord};

/// One pending local mutation, keyed externally by related-entity id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ActionEntry {
    /// User added a relationship locally; the server has not been told yet.
    Insert { record: RelationshipRecord },
    /// User modified fields of an existing relationship.
    Update { patch: RecordPatch },
    /// User removed a relationship locally.
    Delete,
}

/// An [`ActionEntry`] plus the moment it was recorded.
///
/// The timestamp feeds the staleness safeguard; it is supplied by the
/// caller, never read from the wall clock here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedAction {
    pub entry: ActionEntry,
    pub recorded_at: DateTime<Utc>,
}

impl LoggedAction {
    pub fn new(entry: ActionEntry, recorded_at: DateTime<Utc>) -> Self {
        Self { entry, recorded_at }
    }
}
