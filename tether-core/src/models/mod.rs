//! Relationship data model.
//!
//! A relationship collection is a many-to-many edge set between two entity
//! types (e.g. dogs and clients), rendered as a list but keyed uniquely by
//! the related entity's id.

pub mod list;
pub mod patch;
pub mod record;
pub mod related_id;
pub mod relation_kind;

pub use list::RelationshipList;
pub use patch::RecordPatch;
pub use record::{EntitySnapshot, RelationshipRecord};
pub use related_id::RelatedId;
pub use relation_kind::RelationKind;
