//! Partial relationship record for pending local updates.

use serde::{Deserialize, Serialize};

use super::record::RelationshipRecord;
use super::relation_kind::RelationKind;

/// A partial [`RelationshipRecord`]: every field optional.
///
/// Set fields win when applied over a base record; unset fields fall
/// through to the base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RelationKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RecordPatch {
    /// Patch that only changes the relationship kind — the most common edit.
    pub fn kind(kind: RelationKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Apply this patch over a base record, producing the patched record.
    pub fn apply_to(&self, base: &RelationshipRecord) -> RelationshipRecord {
        let mut record = base.clone();
        if let Some(kind) = self.kind {
            record.kind = kind;
        }
        if let Some(name) = &self.name {
            record.snapshot.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.snapshot.email = Some(email.clone());
        }
        if let Some(phone) = &self.phone {
            record.snapshot.phone = Some(phone.clone());
        }
        record
    }

    /// Merge a later patch over this one. Fields set in `later` win;
    /// fields only set here survive.
    pub fn overlay(&mut self, later: &RecordPatch) {
        if later.kind.is_some() {
            self.kind = later.kind;
        }
        if later.name.is_some() {
            self.name = later.name.clone();
        }
        if later.email.is_some() {
            self.email = later.email.clone();
        }
        if later.phone.is_some() {
            self.phone = later.phone.clone();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RelationshipRecord {
        let mut record = RelationshipRecord::new("c-1", RelationKind::Owner, "Jo");
        record.snapshot.email = Some("jo@example.com".to_string());
        record
    }

    #[test]
    fn set_fields_win_unset_fall_through() {
        let patch = RecordPatch::kind(RelationKind::EmergencyContact);
        let patched = patch.apply_to(&base());
        assert_eq!(patched.kind, RelationKind::EmergencyContact);
        assert_eq!(patched.snapshot.name, "Jo");
        assert_eq!(patched.snapshot.email.as_deref(), Some("jo@example.com"));
    }

    #[test]
    fn overlay_later_wins_where_set() {
        let mut earlier = RecordPatch {
            kind: Some(RelationKind::Caretaker),
            name: Some("Joanna".to_string()),
            ..RecordPatch::default()
        };
        let later = RecordPatch {
            kind: Some(RelationKind::Owner),
            phone: Some("555-0100".to_string()),
            ..RecordPatch::default()
        };
        earlier.overlay(&later);
        assert_eq!(earlier.kind, Some(RelationKind::Owner));
        assert_eq!(earlier.name.as_deref(), Some("Joanna"));
        assert_eq!(earlier.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = RecordPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&base()), base());
    }
}
