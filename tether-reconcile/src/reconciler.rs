//! Pure merge of authoritative server state with pending local intent.

use tracing::trace;

use tether_core::RelationshipList;

use crate::action::{ActionEntry, ActionLog};

/// Compute the relationship list to display.
///
/// Starts from `server` as the baseline, then replays the action log over
/// it:
///
/// - `Insert` forces the pending record into the result, even if the server
///   coincidentally has an entry for that id — the server has not been told
///   about the insert, so the locally edited fields take precedence.
/// - `Update` merges the patch onto the server's record; if the server no
///   longer lists the id, onto the last known local record. With no base on
///   either side the entry renders nothing (the patch waits in the log for
///   a refresh that restores the record).
/// - `Delete` removes the id regardless of server state.
///
/// Ids absent from the log pass through from `server` untouched, which is
/// what lets a background refresh pick up another user's concurrent edit
/// without clobbering pending work here.
///
/// Total and referentially deterministic: no I/O, no clock, no randomness.
/// Output is a fresh list; inputs are never mutated.
pub fn reconcile(
    local: &RelationshipList,
    server: &RelationshipList,
    log: &ActionLog,
) -> RelationshipList {
    let mut merged = server.clone();

    for (id, action) in log.entries() {
        match &action.entry {
            ActionEntry::Insert { record } => {
                merged.insert(record.clone());
            }
            ActionEntry::Update { patch } => {
                if let Some(base) = server.get(id).or_else(|| local.get(id)) {
                    merged.insert(patch.apply_to(base));
                }
            }
            ActionEntry::Delete => {
                merged.remove(id);
            }
        }
    }

    trace!(
        server = server.len(),
        pending = log.len(),
        merged = merged.len(),
        "reconciled relationship list"
    );

    merged
}
