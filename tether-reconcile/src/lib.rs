//! # tether-reconcile
//!
//! Optimistic reconciliation for relationship collections.
//!
//! A form session holds the relationship list it is rendering plus an
//! [`ActionLog`] of pending local edits. Whenever authoritative data arrives
//! from the server (mount, background refetch, post-submit refresh),
//! [`reconcile`] folds server truth into local state without discarding
//! uncommitted edits: ids the user has not touched always reflect the
//! server, ids with a pending action keep the local intent until it is
//! explicitly cleared.

pub mod action;
pub mod reconciler;
pub mod session;

pub use action::{ActionEntry, ActionLog, LoggedAction};
pub use reconciler::reconcile;
pub use session::EditSession;
