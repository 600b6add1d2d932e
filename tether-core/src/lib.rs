//! # tether-core
//!
//! Foundation crate for the tether reconciliation library.
//! Defines the relationship models, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ReconcileConfig;
pub use errors::{TetherError, TetherResult};
pub use models::{
    EntitySnapshot, RecordPatch, RelatedId, RelationKind, RelationshipList, RelationshipRecord,
};
