//! Frontmatter write plans for column moves.

use orgboard_model::{ColumnDef, FieldMapping};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One frontmatter mutation requested from the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldWrite {
    Set { field: String, value: Value },
    Clear { field: String },
}

impl FieldWrite {
    pub fn set(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Set {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn clear(field: impl Into<String>) -> Self {
        Self::Clear {
            field: field.into(),
        }
    }
}

/// Computes the frontmatter mutations that move a record into `target`.
///
/// Moving to the default column clears the rule's value fields and raises the
/// marker. Moving to a specific column writes its matching value and clears
/// the fallback and marker fields so the record cannot be re-classified by a
/// stale field on the next read.
pub fn writes_for_move(target: &ColumnDef, mapping: &FieldMapping) -> Vec<FieldWrite> {
    let mut writes = Vec::new();
    if target.is_default {
        writes.push(FieldWrite::clear(&mapping.field));
        if let Some(fallback) = &mapping.fallback_field {
            writes.push(FieldWrite::clear(fallback));
        }
        if let Some(marker) = &mapping.default_field {
            writes.push(FieldWrite::set(marker, true));
        }
    } else {
        match &target.field_value {
            Some(value) => writes.push(FieldWrite::set(&mapping.field, value.clone())),
            None => writes.push(FieldWrite::clear(&mapping.field)),
        }
        if let Some(fallback) = &mapping.fallback_field {
            writes.push(FieldWrite::clear(fallback));
        }
        if let Some(marker) = &mapping.default_field {
            writes.push(FieldWrite::clear(marker));
        }
    }
    writes
}
