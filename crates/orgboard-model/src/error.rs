//! Error types shared across the board engine.

use thiserror::Error;

/// Errors surfaced by board operations.
///
/// Per-record failures (malformed metadata, transform errors) never reach
/// this type; they degrade to exclusion plus a log entry.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A widget callback named a column the configuration does not know.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    /// The drag-and-drop widget rejected an operation.
    #[error("widget error: {0}")]
    Widget(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
