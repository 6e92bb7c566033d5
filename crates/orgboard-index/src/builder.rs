//! Full index rebuild and single-record resolution.

use anyhow::Result;
use orgboard_classify::{ColumnLookup, classify};
use orgboard_model::{ColumnDef, FieldMapping, RecordMeta};
use tracing::warn;

use crate::entry::{BoardEntry, EntryStore};
use crate::filter::RecordFilter;
use crate::store::RecordStore;

/// Caller-supplied shaping of a record into the item rendered on its card.
pub type ItemTransform<T> = Box<dyn Fn(&str, &RecordMeta) -> Result<T>>;

/// Record selection and shaping rules for one board.
pub struct BoardRules<T> {
    pub filter: RecordFilter,
    pub transform: ItemTransform<T>,
}

impl<T> BoardRules<T> {
    pub fn new(
        filter: RecordFilter,
        transform: impl Fn(&str, &RecordMeta) -> Result<T> + 'static,
    ) -> Self {
        Self {
            filter,
            transform: Box::new(transform),
        }
    }
}

/// Resolves one record into a board entry.
///
/// Returns `None` when the record is missing, filtered out, fails to
/// transform, or maps to no column. Transform failures are logged and
/// swallowed: one malformed record must never break the whole board.
pub fn resolve_entry<T>(
    store: &dyn RecordStore,
    path: &str,
    mapping: &FieldMapping,
    lookup: &ColumnLookup,
    rules: &BoardRules<T>,
) -> Option<BoardEntry<T>> {
    let meta = store.metadata(path)?;
    if !rules.filter.matches(path, &meta) {
        return None;
    }
    let item = match (rules.transform)(path, &meta) {
        Ok(item) => item,
        Err(error) => {
            warn!(path, %error, "record transform failed; excluding from board");
            return None;
        }
    };
    let column = classify(&meta.frontmatter, mapping, lookup)?;
    Some(BoardEntry {
        path: path.to_string(),
        item,
        frontmatter: meta.frontmatter,
        column,
    })
}

/// Builds the entry index from scratch in a single pass over the store.
///
/// Used on initial mount and whenever the column set or classification rule
/// changes; the index built for one rule cannot be reused for another.
pub fn build_entries<T>(
    store: &dyn RecordStore,
    columns: &[ColumnDef],
    mapping: &FieldMapping,
    lookup: &ColumnLookup,
    rules: &BoardRules<T>,
) -> EntryStore<T> {
    let mut entries = EntryStore::new(columns);
    for path in store.record_paths() {
        if let Some(entry) = resolve_entry(store, &path, mapping, lookup, rules) {
            entries.insert(entry);
        }
    }
    entries
}
