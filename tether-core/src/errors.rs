//! Error taxonomy for the tether workspace.
//!
//! The reconciler, Action Log mutators, and the pagination validator are
//! total functions and never return these. The fallible surface is limited
//! to strict list construction and string parsing.

/// Result alias used across the workspace.
pub type TetherResult<T> = Result<T, TetherError>;

/// Top-level error type for the tether workspace.
#[derive(Debug, thiserror::Error)]
pub enum TetherError {
    #[error("duplicate related entity id: {id}")]
    DuplicateRelated { id: String },

    #[error("unknown relation kind: {value}")]
    UnknownKind { value: String },
}
