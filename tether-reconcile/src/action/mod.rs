//! Pending local mutations against a relationship collection.

pub mod entry;
pub mod log;

pub use entry::{ActionEntry, LoggedAction};
pub use log::ActionLog;
