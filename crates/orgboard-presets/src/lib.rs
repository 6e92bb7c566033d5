#![deny(unsafe_code)]

pub mod card;
pub mod item;
pub mod preset;
pub mod weekly;

pub use card::{CARD_CLASS, VaultResolver, render_card, resolve_cover};
pub use item::{ItemKind, OrganiserItem};
pub use preset::{OrganiserPreset, PRESETS, PresetField, find_preset};
pub use weekly::{
    DATE_FIELD, FALLBACK_FIELD, MARKER_FIELD, organiser_rules, week_columns, week_range_label,
    weekly_config,
};
