//! Record store contract and an in-memory implementation.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use orgboard_classify::FieldWrite;
use orgboard_model::RecordMeta;

/// The external store owning the records.
///
/// The engine never creates or deletes records through this trait; it reads
/// metadata snapshots and requests field updates. Change notifications are
/// delivered by the embedder as [`crate::RecordEvent`]s on the same thread.
pub trait RecordStore {
    /// Paths of all candidate records, in store order.
    fn record_paths(&self) -> Vec<String>;

    /// Current metadata snapshot for one record, or `None` when the record
    /// does not exist or its metadata cannot be read.
    fn metadata(&self, path: &str) -> Option<RecordMeta>;

    /// Applies a frontmatter write plan to one record. May fail; the caller
    /// treats failures as non-fatal.
    fn apply_writes(&mut self, path: &str, writes: &[FieldWrite]) -> Result<()>;
}

/// In-memory record store for tests and simple embeddings.
#[derive(Debug, Default)]
pub struct MemoryVault {
    records: BTreeMap<String, RecordMeta>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, meta: RecordMeta) {
        self.records.insert(path.into(), meta);
    }

    pub fn remove(&mut self, path: &str) -> Option<RecordMeta> {
        self.records.remove(path)
    }

    /// Moves a record to a new path, keeping its metadata.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> bool {
        match self.records.remove(from) {
            Some(meta) => {
                self.records.insert(to.into(), meta);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryVault {
    fn record_paths(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    fn metadata(&self, path: &str) -> Option<RecordMeta> {
        self.records.get(path).cloned()
    }

    fn apply_writes(&mut self, path: &str, writes: &[FieldWrite]) -> Result<()> {
        let Some(meta) = self.records.get_mut(path) else {
            bail!("no such record: {path}");
        };
        for write in writes {
            match write {
                FieldWrite::Set { field, value } => {
                    meta.frontmatter.insert(field.clone(), value.clone());
                }
                FieldWrite::Clear { field } => {
                    meta.frontmatter.remove(field);
                }
            }
        }
        Ok(())
    }
}
