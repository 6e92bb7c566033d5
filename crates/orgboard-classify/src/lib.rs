#![deny(unsafe_code)]

pub mod normalize;
pub mod rule;
pub mod writeback;

pub use normalize::{DEFAULT_DATE_FORMAT, normalize_value};
pub use rule::{ColumnLookup, classify, read_field};
pub use writeback::{FieldWrite, writes_for_move};
