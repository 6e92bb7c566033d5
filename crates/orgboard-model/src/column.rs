//! Column definitions and identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::FieldValue;

/// Identifier of one board column.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColumnId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// A named bucket of the board.
///
/// A column either declares the normalized field value it collects or is
/// flagged as the default catch-all for value-less marked records. Columns
/// are immutable for the lifetime of one board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub title: String,
    /// Normalized value this column collects, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_value: Option<FieldValue>,
    /// Catch-all for records with no field value but the marker set.
    #[serde(default)]
    pub is_default: bool,
}

impl ColumnDef {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            field_value: None,
            is_default: false,
        }
    }

    pub fn default_column(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            field_value: None,
            is_default: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.field_value = Some(value.into());
        self
    }
}
