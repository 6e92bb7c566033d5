#![deny(unsafe_code)]

pub mod builder;
pub mod entry;
pub mod events;
pub mod filter;
pub mod store;

pub use builder::{BoardRules, ItemTransform, build_entries, resolve_entry};
pub use entry::{BoardEntry, EntryStore, UpsertOutcome};
pub use events::{RecordEvent, apply_event};
pub use filter::RecordFilter;
pub use store::{MemoryVault, RecordStore};
