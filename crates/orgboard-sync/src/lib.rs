#![deny(unsafe_code)]

pub mod patch;
pub mod session;
pub mod widget;

pub use patch::sync_column;
pub use session::{BoardSession, SessionTiming};
pub use widget::BoardWidget;
