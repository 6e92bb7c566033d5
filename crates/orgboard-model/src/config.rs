//! Board configuration.

use serde::{Deserialize, Serialize};

use crate::column::{ColumnDef, ColumnId};
use crate::fields::FieldMapping;

/// One board configuration: the column set and the classification rule.
///
/// Changing the time window, preset or rule produces an entirely new
/// configuration; the entry index built for one configuration cannot be
/// reused for another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub board_id: String,
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub mapping: FieldMapping,
}

impl BoardConfig {
    pub fn column(&self, id: &ColumnId) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| &column.id == id)
    }

    pub fn default_column(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.is_default)
    }
}
