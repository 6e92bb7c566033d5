//! Field semantics for classification rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Semantic type of a frontmatter field, declared by the classification rule.
///
/// The type selects the normalization applied to raw metadata before any
/// column matching, so the same raw shape always resolves the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Flexible textual or native dates, canonicalized to a format string.
    Date,
    /// Truthy/falsy markers (`true`, `"yes"`, `1`, ...).
    Boolean,
    /// Closed set of string values.
    Enum,
    /// Free text, trimmed.
    Text,
}

/// A normalized frontmatter value.
///
/// Date, enum and text fields normalize to [`FieldValue::Text`]; boolean
/// fields normalize to [`FieldValue::Flag`]. The ordering derives make the
/// value usable as the key of the precomputed value→column lookup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Flag(flag) => Value::Bool(flag),
            FieldValue::Text(text) => Value::String(text),
        }
    }
}

/// The classification rule: which frontmatter fields assign a record to a
/// column, and how their raw values are normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Primary field read from frontmatter.
    pub field: String,
    /// Semantic type of the primary (and fallback) field.
    pub field_type: FieldType,
    /// Read when the primary field is absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_field: Option<String>,
    /// Boolean marker routing value-less records to the default column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_field: Option<String>,
    /// chrono format string for date canonicalization; `%Y-%m-%d` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl FieldMapping {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            fallback_field: None,
            default_field: None,
            date_format: None,
        }
    }

    pub fn with_fallback(mut self, field: impl Into<String>) -> Self {
        self.fallback_field = Some(field.into());
        self
    }

    pub fn with_default_marker(mut self, field: impl Into<String>) -> Self {
        self.default_field = Some(field.into());
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }
}
