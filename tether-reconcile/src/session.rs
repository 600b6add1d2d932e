//! EditSession — caller-owned editing state for one relationship collection.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use tether_core::{RecordPatch, ReconcileConfig, RelatedId, RelationshipList, RelationshipRecord};

use crate::action::ActionLog;
use crate::reconciler::reconcile;

/// Editing state for one relationship collection within a form.
///
/// Owns the rendered list, the pending [`ActionLog`], and the last server
/// snapshot. Every local edit and every server refresh goes through
/// [`reconcile`], so the rendered list always reflects server truth plus
/// pending intent. Not internally synchronized — one session per form,
/// mutated from one place.
#[derive(Debug, Clone)]
pub struct EditSession {
    collection: String,
    config: ReconcileConfig,
    /// What the user sees right now.
    local: RelationshipList,
    /// Last authoritative list received from the server.
    server: RelationshipList,
    log: ActionLog,
    last_synced_at: Option<DateTime<Utc>>,
}

impl EditSession {
    pub fn new(collection: impl Into<String>, config: ReconcileConfig) -> Self {
        Self::with_initial(collection, config, RelationshipList::new())
    }

    /// Start from an already-fetched list (e.g. server-rendered initial data).
    pub fn with_initial(
        collection: impl Into<String>,
        config: ReconcileConfig,
        initial: RelationshipList,
    ) -> Self {
        Self {
            collection: collection.into(),
            config,
            local: initial.clone(),
            server: initial,
            log: ActionLog::new(),
            last_synced_at: None,
        }
    }

    /// The list to render right now.
    pub fn records(&self) -> &RelationshipList {
        &self.local
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn pending(&self) -> &ActionLog {
        &self.log
    }

    pub fn pending_count(&self) -> usize {
        self.log.len()
    }

    /// True when there are unsynced local edits.
    pub fn is_dirty(&self) -> bool {
        !self.log.is_empty()
    }

    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Add a relationship locally.
    pub fn insert(&mut self, record: RelationshipRecord, now: DateTime<Utc>) {
        self.log.record_insert(record, now);
        self.refresh_view();
    }

    /// Modify fields of a relationship locally.
    ///
    /// With no base record on either side the patch is logged but renders
    /// nothing until a server refresh supplies the record.
    pub fn update(&mut self, id: RelatedId, patch: RecordPatch, now: DateTime<Utc>) {
        self.log.record_update(id, patch, now);
        self.refresh_view();
    }

    /// Remove a relationship locally.
    pub fn delete(&mut self, id: RelatedId, now: DateTime<Utc>) {
        self.log.record_delete(id, now);
        self.refresh_view();
    }

    /// Drop the pending entry for `id`, reverting the rendered row to
    /// server truth.
    pub fn undo(&mut self, id: &RelatedId) {
        if self.log.clear(id).is_some() {
            self.refresh_view();
        }
    }

    /// Fold a freshly fetched authoritative list into the session.
    ///
    /// Call on mount, on background refetch, and after a submit refresh.
    /// Prunes stale pending entries first when the staleness safeguard is
    /// enabled.
    pub fn server_refresh(&mut self, server: RelationshipList, now: DateTime<Utc>) {
        if self.config.stale_after_secs > 0 {
            let age = i64::try_from(self.config.stale_after_secs).unwrap_or(i64::MAX);
            let pruned = self.log.prune_stale(now - Duration::seconds(age));
            if !pruned.is_empty() {
                warn!(
                    collection = %self.collection,
                    pruned = pruned.len(),
                    "pruned stale pending edits"
                );
            }
        }

        self.server = server;
        self.refresh_view();
        self.last_synced_at = Some(now);
        debug!(
            collection = %self.collection,
            server = self.server.len(),
            pending = self.log.len(),
            "applied server refresh"
        );
    }

    /// Clear pending entries the most recent submit persisted.
    ///
    /// Must only be called on an explicit submit-success signal; a failed
    /// or unconfirmed submit leaves the log untouched so local intent keeps
    /// winning.
    pub fn confirm_submitted(&mut self, ids: &[RelatedId]) {
        let mut cleared = 0usize;
        for id in ids {
            if self.log.clear(id).is_some() {
                cleared += 1;
            }
        }
        if cleared > 0 {
            self.refresh_view();
        }
        debug!(
            collection = %self.collection,
            cleared,
            remaining = self.log.len(),
            "confirmed submitted edits"
        );
    }

    /// Recompute the rendered list from the last server snapshot plus the
    /// current log. The previous rendered list serves as the update-patch
    /// fallback base.
    fn refresh_view(&mut self) {
        self.local = reconcile(&self.local, &self.server, &self.log);
    }
}
