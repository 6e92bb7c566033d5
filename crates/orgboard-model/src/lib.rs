#![deny(unsafe_code)]

pub mod card;
pub mod column;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;

pub use card::{Card, ColumnCards, GROUP_HEADER_CLASS, group_header_id, is_group_header_id};
pub use column::{ColumnDef, ColumnId};
pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use fields::{FieldMapping, FieldType, FieldValue};
pub use record::{Frontmatter, RecordMeta, record_basename};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = BoardConfig {
            board_id: "weekly-organiser".to_string(),
            name: "Weekly Planner".to_string(),
            columns: vec![
                ColumnDef::default_column("marked", "Marked"),
                ColumnDef::new("2024-06-03", "Mon 3 Jun")
                    .with_value(FieldValue::Text("2024-06-03".to_string())),
            ],
            mapping: FieldMapping::new("scheduled", FieldType::Date)
                .with_fallback("date")
                .with_default_marker("marked"),
        };
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: BoardConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round.board_id, "weekly-organiser");
        assert_eq!(round.columns.len(), 2);
        assert!(round.columns[0].is_default);
        assert_eq!(round.mapping.fallback_field.as_deref(), Some("date"));
    }

    #[test]
    fn group_header_ids_are_namespaced() {
        let id = group_header_id(&ColumnId::new("2024-06-03"), "recipe");
        assert_eq!(id, "__group:2024-06-03:recipe");
        assert!(is_group_header_id(&id));
        assert!(!is_group_header_id("notes/dinner.md"));
    }
}
