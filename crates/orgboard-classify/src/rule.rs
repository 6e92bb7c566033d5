//! Record → column classification.

use std::collections::BTreeMap;

use orgboard_model::{ColumnDef, ColumnId, FieldMapping, FieldType, FieldValue, Frontmatter};

use crate::normalize::normalize_value;

/// Precomputed value→column lookup for one column set.
///
/// Built once per board configuration. When two columns are misconfigured
/// with the same matching value, the first declared column wins; likewise the
/// first column flagged as default is the one recorded.
#[derive(Debug, Clone)]
pub struct ColumnLookup {
    by_value: BTreeMap<FieldValue, ColumnId>,
    default_column: Option<ColumnId>,
}

impl ColumnLookup {
    pub fn new(columns: &[ColumnDef]) -> Self {
        let mut by_value = BTreeMap::new();
        let mut default_column = None;
        for column in columns {
            if column.is_default && default_column.is_none() {
                default_column = Some(column.id.clone());
            }
            if let Some(value) = &column.field_value {
                by_value
                    .entry(value.clone())
                    .or_insert_with(|| column.id.clone());
            }
        }
        Self {
            by_value,
            default_column,
        }
    }

    pub fn column_for(&self, value: &FieldValue) -> Option<&ColumnId> {
        self.by_value.get(value)
    }

    pub fn default_column(&self) -> Option<&ColumnId> {
        self.default_column.as_ref()
    }
}

/// Reads the rule's field from frontmatter, consulting the fallback field
/// when the primary is absent or empty.
pub fn read_field(frontmatter: &Frontmatter, mapping: &FieldMapping) -> Option<FieldValue> {
    let format = mapping.date_format.as_deref();
    let primary = frontmatter
        .get(&mapping.field)
        .and_then(|raw| normalize_value(raw, mapping.field_type, format));
    if primary.is_some() {
        return primary;
    }
    let fallback = mapping.fallback_field.as_deref()?;
    frontmatter
        .get(fallback)
        .and_then(|raw| normalize_value(raw, mapping.field_type, format))
}

/// Returns the column the record belongs to, or `None` when unmapped.
///
/// A concrete field value always wins: the default-marker field is only
/// consulted when no value was found at all, so a record carrying both a
/// valid value and the marker is routed to the value's column. A value that
/// matches no column leaves the record unmapped rather than defaulted.
pub fn classify(
    frontmatter: &Frontmatter,
    mapping: &FieldMapping,
    lookup: &ColumnLookup,
) -> Option<ColumnId> {
    match read_field(frontmatter, mapping) {
        Some(value) => lookup.column_for(&value).cloned(),
        None => {
            let marker = mapping.default_field.as_deref()?;
            let raw = frontmatter.get(marker)?;
            let marked = matches!(
                normalize_value(raw, FieldType::Boolean, None),
                Some(FieldValue::Flag(true))
            );
            if marked {
                lookup.default_column().cloned()
            } else {
                None
            }
        }
    }
}
