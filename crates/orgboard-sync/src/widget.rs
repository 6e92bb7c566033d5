//! Contract of the embedder's drag-and-drop board widget.

use anyhow::Result;
use orgboard_model::{Card, ColumnCards, ColumnId};

/// The rendered kanban surface, owned by the embedder.
///
/// The widget is mutated through fine-grained operations so a refresh of one
/// column never rebuilds the others; [`BoardSession`](crate::BoardSession)
/// only falls back to [`reset`](Self::reset) when the whole board layout
/// changes. Every mutation may fail (the surface may have been torn down
/// under us) and failures are reported, never retried.
pub trait BoardWidget {
    /// Replaces the entire board with the given columns.
    fn reset(&mut self, columns: &[ColumnCards]) -> Result<()>;

    fn has_column(&self, id: &ColumnId) -> bool;

    /// Adds a column with its full card list.
    fn add_column(&mut self, column: &ColumnCards) -> Result<()>;

    fn column_title(&self, id: &ColumnId) -> Option<String>;

    fn set_column_title(&mut self, id: &ColumnId, title: &str) -> Result<()>;

    /// Card ids of one column in current display order.
    fn card_ids(&self, id: &ColumnId) -> Vec<String>;

    /// Current `(html, class)` of one card, or `None` when absent.
    fn card_body(&self, id: &ColumnId, card_id: &str) -> Option<(String, String)>;

    /// Appends a card to a column.
    fn add_card(&mut self, id: &ColumnId, card: &Card) -> Result<()>;

    fn remove_card(&mut self, id: &ColumnId, card_id: &str) -> Result<()>;

    /// Overwrites a card's html and class in place.
    fn set_card_body(&mut self, id: &ColumnId, card: &Card) -> Result<()>;

    /// Rearranges a column's cards into the given id order.
    fn reorder_cards(&mut self, id: &ColumnId, order: &[String]) -> Result<()>;
}
