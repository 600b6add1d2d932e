//! Keyed relationship collection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{TetherError, TetherResult};

use super::record::RelationshipRecord;
use super::related_id::RelatedId;

/// A relationship collection keyed by related-entity id.
///
/// Invariant: at most one record per [`RelatedId`]. Iteration order is
/// deterministic (key order) but semantically irrelevant; renderers apply
/// their own ordering via [`RelationshipList::sorted_by_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipList {
    records: BTreeMap<RelatedId, RelationshipRecord>,
}

impl RelationshipList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from server rows, permissively: on a duplicate id the last row
    /// wins. Use [`RelationshipList::try_from_records`] where a duplicate
    /// indicates a query bug that should surface.
    pub fn from_records(records: impl IntoIterator<Item = RelationshipRecord>) -> Self {
        let mut list = Self::new();
        for record in records {
            list.insert(record);
        }
        list
    }

    /// Build from server rows, strictly: a duplicate id is an error.
    pub fn try_from_records(
        records: impl IntoIterator<Item = RelationshipRecord>,
    ) -> TetherResult<Self> {
        let mut list = Self::new();
        for record in records {
            let id = record.related_id.clone();
            if list.records.insert(id.clone(), record).is_some() {
                return Err(TetherError::DuplicateRelated { id: id.to_string() });
            }
        }
        Ok(list)
    }

    /// Insert or replace the record for its related id.
    pub fn insert(&mut self, record: RelationshipRecord) -> Option<RelationshipRecord> {
        self.records.insert(record.related_id.clone(), record)
    }

    pub fn get(&self, id: &RelatedId) -> Option<&RelationshipRecord> {
        self.records.get(id)
    }

    pub fn remove(&mut self, id: &RelatedId) -> Option<RelationshipRecord> {
        self.records.remove(id)
    }

    pub fn contains(&self, id: &RelatedId) -> bool {
        self.records.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RelatedId, &RelationshipRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by display name (ties broken by id) — the ordering
    /// renderers want; reconciliation itself never sorts.
    pub fn sorted_by_name(&self) -> Vec<&RelationshipRecord> {
        let mut records: Vec<&RelationshipRecord> = self.records.values().collect();
        records.sort_by(|a, b| {
            a.snapshot
                .name
                .cmp(&b.snapshot.name)
                .then_with(|| a.related_id.cmp(&b.related_id))
        });
        records
    }
}

impl FromIterator<RelationshipRecord> for RelationshipList {
    fn from_iter<T: IntoIterator<Item = RelationshipRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}
