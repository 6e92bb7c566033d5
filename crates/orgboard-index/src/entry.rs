//! The paired board-entry index.

use std::collections::BTreeMap;

use orgboard_model::{ColumnDef, ColumnId, Frontmatter};

/// Projection of one record into the board: the transformed item, the raw
/// frontmatter it came from, and the column that currently owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry<T> {
    pub path: String,
    pub item: T,
    pub frontmatter: Frontmatter,
    pub column: ColumnId,
}

/// Outcome of an upsert, naming the columns whose contents went stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(ColumnId),
    Replaced(ColumnId),
    Moved { from: ColumnId, to: ColumnId },
}

/// Two mutually-consistent indexes over board entries: an ordered entry list
/// per column and an owning-column lookup per record path.
///
/// Only paired mutations are exposed, so the two indexes cannot drift apart:
/// every entry listed under a column is owned by that column in the path
/// lookup, and vice versa. Per-column order is discovery order; in-place
/// replacement never reorders.
#[derive(Debug)]
pub struct EntryStore<T> {
    by_column: BTreeMap<ColumnId, Vec<BoardEntry<T>>>,
    by_path: BTreeMap<String, ColumnId>,
}

impl<T> EntryStore<T> {
    /// An index pre-seeded with an empty bucket per configured column.
    pub fn new(columns: &[ColumnDef]) -> Self {
        let by_column = columns
            .iter()
            .map(|column| (column.id.clone(), Vec::new()))
            .collect();
        Self {
            by_column,
            by_path: BTreeMap::new(),
        }
    }

    /// Inserts a fresh entry at the end of its column's bucket.
    ///
    /// The path must not already be indexed; use [`Self::upsert`] when it
    /// might be.
    pub fn insert(&mut self, entry: BoardEntry<T>) -> ColumnId {
        let column = entry.column.clone();
        self.by_path.insert(entry.path.clone(), column.clone());
        self.by_column.entry(column.clone()).or_default().push(entry);
        column
    }

    /// Removes the entry for `path`, returning the column that owned it.
    pub fn remove(&mut self, path: &str) -> Option<ColumnId> {
        let column = self.by_path.remove(path)?;
        if let Some(bucket) = self.by_column.get_mut(&column)
            && let Some(index) = bucket.iter().position(|entry| entry.path == path)
        {
            bucket.remove(index);
        }
        Some(column)
    }

    /// Inserts, replaces in place, or moves the entry for its path.
    ///
    /// Same-column replacement preserves the entry's list position so card
    /// order stays stable across typing-triggered metadata saves; a move
    /// splices out of the old bucket and appends to the new one.
    pub fn upsert(&mut self, entry: BoardEntry<T>) -> UpsertOutcome {
        match self.by_path.get(&entry.path).cloned() {
            None => UpsertOutcome::Inserted(self.insert(entry)),
            Some(current) if current == entry.column => {
                if let Some(bucket) = self.by_column.get_mut(&current)
                    && let Some(slot) = bucket.iter_mut().find(|slot| slot.path == entry.path)
                {
                    *slot = entry;
                }
                UpsertOutcome::Replaced(current)
            }
            Some(previous) => {
                self.remove(&entry.path);
                let to = self.insert(entry);
                UpsertOutcome::Moved { from: previous, to }
            }
        }
    }

    /// Moves an already-indexed entry to another column, keeping its item and
    /// frontmatter. Returns the previous owning column, or `None` when the
    /// path is unknown or already in the target column.
    pub fn move_entry(&mut self, path: &str, to: &ColumnId) -> Option<ColumnId> {
        let from = self.by_path.get(path)?.clone();
        if &from == to {
            return None;
        }
        let bucket = self.by_column.get_mut(&from)?;
        let index = bucket.iter().position(|entry| entry.path == path)?;
        let mut entry = bucket.remove(index);
        entry.column = to.clone();
        self.by_path.insert(path.to_string(), to.clone());
        self.by_column.entry(to.clone()).or_default().push(entry);
        Some(from)
    }

    /// Column currently owning `path`, if the record is mapped.
    pub fn column_of(&self, path: &str) -> Option<&ColumnId> {
        self.by_path.get(path)
    }

    /// Entries of one column in display (discovery) order.
    pub fn entries(&self, column: &ColumnId) -> &[BoardEntry<T>] {
        self.by_column
            .get(column)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.by_column.keys()
    }

    pub fn record_count(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
