//! The item carried on organiser cards.

use std::fmt;

use serde_json::Value;

/// Kind of record the organiser knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemKind {
    Recipe,
    Exercise,
    Task,
    Unknown,
}

impl ItemKind {
    /// Parses a normalized (trimmed, lowercased) type value.
    pub fn parse(value: &str) -> Self {
        match value {
            "recipe" => Self::Recipe,
            "exercise" => Self::Exercise,
            "task" => Self::Task,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Exercise => "exercise",
            Self::Task => "task",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record shaped for display on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganiserItem {
    pub path: String,
    pub title: String,
    pub kind: ItemKind,
    /// Raw cover value from the frontmatter, unvalidated.
    pub cover: Option<String>,
    pub scheduled: Option<String>,
    pub marked: bool,
}

/// Normalizes one raw type value: trimmed and lowercased, `None` when blank.
pub fn normalize_kind_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Null => return None,
        other => other.to_string(),
    };
    let normalized = text.trim().to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}

/// Normalized type values of a frontmatter `type` entry, which may be a
/// single value or a list.
pub fn normalize_kind_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(values) => values.iter().filter_map(normalize_kind_value).collect(),
        single => normalize_kind_value(single).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_values_are_trimmed_and_lowercased() {
        assert_eq!(normalize_kind_value(&json!("  Recipe ")), Some("recipe".to_string()));
        assert_eq!(normalize_kind_value(&json!("   ")), None);
        assert_eq!(normalize_kind_value(&json!(null)), None);
    }

    #[test]
    fn kind_lists_flatten_and_drop_blanks() {
        assert_eq!(
            normalize_kind_list(&json!(["Task", "", "EXERCISE"])),
            vec!["task".to_string(), "exercise".to_string()]
        );
        assert_eq!(normalize_kind_list(&json!("recipe")), vec!["recipe".to_string()]);
    }

    #[test]
    fn unknown_kinds_parse_to_the_unknown_variant() {
        assert_eq!(ItemKind::parse("recipe"), ItemKind::Recipe);
        assert_eq!(ItemKind::parse("shopping"), ItemKind::Unknown);
    }
}
