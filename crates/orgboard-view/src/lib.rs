#![deny(unsafe_code)]

pub mod escape;
pub mod project;

pub use escape::escape_html;
pub use project::{UNGROUPED, ViewOptions, project, project_column};
