//! Configuration for reconciliation sessions.
//!
//! # Examples
//!
//! ```
//! use tether_core::config::ReconcileConfig;
//!
//! let config = ReconcileConfig::default();
//! assert_eq!(config.stale_after_secs, 0);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for an edit session.
///
/// With `stale_after_secs = 0` (the default), pending local edits override
/// server data until explicitly cleared by a confirmed submit or a user undo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Seconds after which a pending action is pruned during a server
    /// refresh. Default: 0 (pending edits never expire).
    pub stale_after_secs: u64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self { stale_after_secs: 0 }
    }
}
