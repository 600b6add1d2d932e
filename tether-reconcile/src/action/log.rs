//! ActionLog — per-id record of the most recent unsynced local mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tether_core::{RecordPatch, RelatedId, RelationshipRecord};

use super::entry::{ActionEntry, LoggedAction};

/// Keyed record of pending local mutations for one relationship collection.
///
/// At most one entry per [`RelatedId`]: a later edit overwrites the prior
/// entry for the same id, so the log always holds the current unsynced
/// intent, not a history. Not internally synchronized — callers serialize
/// mutator calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog {
    entries: BTreeMap<RelatedId, LoggedAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a local insert. Overwrites any prior entry for the id.
    pub fn record_insert(&mut self, record: RelationshipRecord, now: DateTime<Utc>) {
        let id = record.related_id.clone();
        self.entries
            .insert(id, LoggedAction::new(ActionEntry::Insert { record }, now));
    }

    /// Record a local update.
    ///
    /// Policy for a prior entry on the same id:
    /// - `Insert`: the patch is applied to the pending record — an
    ///   uncommitted new relationship edited again stays a single insert.
    /// - `Update`: the later patch is overlaid over the earlier one.
    /// - `Delete` or none: the entry becomes a plain `Update` (last intent
    ///   wins).
    pub fn record_update(&mut self, id: RelatedId, patch: RecordPatch, now: DateTime<Utc>) {
        let entry = match self.entries.remove(&id) {
            Some(LoggedAction {
                entry: ActionEntry::Insert { record },
                ..
            }) => ActionEntry::Insert {
                record: patch.apply_to(&record),
            },
            Some(LoggedAction {
                entry: ActionEntry::Update { patch: mut earlier },
                ..
            }) => {
                earlier.overlay(&patch);
                ActionEntry::Update { patch: earlier }
            }
            _ => ActionEntry::Update { patch },
        };
        self.entries.insert(id, LoggedAction::new(entry, now));
    }

    /// Record a local delete, regardless of any prior entry.
    pub fn record_delete(&mut self, id: RelatedId, now: DateTime<Utc>) {
        self.entries
            .insert(id, LoggedAction::new(ActionEntry::Delete, now));
    }

    /// Remove the entry for `id`. Call only once the change is confirmed
    /// round-tripped through the server, or on an explicit user undo.
    pub fn clear(&mut self, id: &RelatedId) -> Option<LoggedAction> {
        self.entries.remove(id)
    }

    pub fn get(&self, id: &RelatedId) -> Option<&LoggedAction> {
        self.entries.get(id)
    }

    /// Restartable iterator over `(id, action)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&RelatedId, &LoggedAction)> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RelatedId> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove entries recorded before `cutoff`, returning the pruned ids.
    ///
    /// Staleness safeguard against a submit that failed without the caller
    /// noticing to skip the clear.
    pub fn prune_stale(&mut self, cutoff: DateTime<Utc>) -> Vec<RelatedId> {
        let stale: Vec<RelatedId> = self
            .entries
            .iter()
            .filter(|(_, action)| action.recorded_at < cutoff)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &stale {
            self.entries.remove(id);
        }
        stale
    }
}
