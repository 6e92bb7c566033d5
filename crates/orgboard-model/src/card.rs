//! Renderable board output.

use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// CSS class marking a non-interactive group-header pseudo-card.
pub const GROUP_HEADER_CLASS: &str = "kanban-group-header";

const GROUP_HEADER_PREFIX: &str = "__group:";

/// One renderable card. For real records the id is the record path; group
/// headers use a namespaced pseudo-id so they can never collide with one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub html: String,
    pub class: String,
}

/// A rendered column: ordered cards under a titled bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCards {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

/// Pseudo-card id for a group header within one column.
pub fn group_header_id(column: &ColumnId, group: &str) -> String {
    format!("{GROUP_HEADER_PREFIX}{column}:{group}")
}

/// True for ids produced by [`group_header_id`].
pub fn is_group_header_id(id: &str) -> bool {
    id.starts_with(GROUP_HEADER_PREFIX)
}
