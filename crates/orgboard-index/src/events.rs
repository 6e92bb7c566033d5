//! Incremental index maintenance from record change events.

use std::collections::BTreeSet;

use orgboard_classify::ColumnLookup;
use orgboard_model::{ColumnId, FieldMapping};

use crate::builder::{BoardRules, resolve_entry};
use crate::entry::{EntryStore, UpsertOutcome};
use crate::store::RecordStore;

/// One record change notification from the embedder.
///
/// Metadata-changed events fire on every save, including keystroke-triggered
/// autosaves; the incremental path below exists so each one costs a single
/// record resolution instead of a full rescan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    Changed { path: String },
    Created { path: String },
    Deleted { path: String },
    Renamed { from: String, to: String },
}

/// Applies one event to the index in place and returns the columns whose
/// rendered contents are now stale: none, the current column for an in-place
/// update, old and new for a move, and the union of both legs for a rename.
pub fn apply_event<T>(
    entries: &mut EntryStore<T>,
    store: &dyn RecordStore,
    mapping: &FieldMapping,
    lookup: &ColumnLookup,
    rules: &BoardRules<T>,
    event: &RecordEvent,
) -> BTreeSet<ColumnId> {
    match event {
        RecordEvent::Changed { path } | RecordEvent::Created { path } => {
            update_record(entries, store, mapping, lookup, rules, path)
        }
        RecordEvent::Deleted { path } => remove_record(entries, path),
        RecordEvent::Renamed { from, to } => {
            let mut stale = remove_record(entries, from);
            stale.extend(update_record(entries, store, mapping, lookup, rules, to));
            stale
        }
    }
}

fn remove_record<T>(entries: &mut EntryStore<T>, path: &str) -> BTreeSet<ColumnId> {
    entries.remove(path).into_iter().collect()
}

fn update_record<T>(
    entries: &mut EntryStore<T>,
    store: &dyn RecordStore,
    mapping: &FieldMapping,
    lookup: &ColumnLookup,
    rules: &BoardRules<T>,
    path: &str,
) -> BTreeSet<ColumnId> {
    let mut stale = BTreeSet::new();
    match resolve_entry(store, path, mapping, lookup, rules) {
        Some(entry) => match entries.upsert(entry) {
            UpsertOutcome::Inserted(column) | UpsertOutcome::Replaced(column) => {
                stale.insert(column);
            }
            UpsertOutcome::Moved { from, to } => {
                stale.insert(from);
                stale.insert(to);
            }
        },
        // No longer mapped (or no longer passes the filter): drop it.
        None => {
            if let Some(column) = entries.remove(path) {
                stale.insert(column);
            }
        }
    }
    stale
}
