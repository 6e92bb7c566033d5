//! Built-in organiser presets.

use orgboard_model::FieldType;

/// A preset field offered for grouping or sorting in the board controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetField {
    pub key: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub groupable: bool,
    pub sortable: bool,
}

/// One built-in board flavour: a label, the record types it admits and the
/// fields its controls expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganiserPreset {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub time_based: bool,
    pub type_filter: &'static [&'static str],
    pub fields: &'static [PresetField],
}

const BASE_FIELDS: &[PresetField] = &[PresetField {
    key: "type",
    label: "Type",
    field_type: FieldType::Enum,
    groupable: true,
    sortable: true,
}];

/// All built-in presets, the first being the default.
pub const PRESETS: &[OrganiserPreset] = &[
    OrganiserPreset {
        id: "weekly",
        label: "Weekly Planner",
        description: "All scheduled items for the week.",
        time_based: true,
        type_filter: &["recipe", "exercise", "task"],
        fields: BASE_FIELDS,
    },
    OrganiserPreset {
        id: "meal",
        label: "Meal Planner",
        description: "Plan recipes across the week.",
        time_based: true,
        type_filter: &["recipe"],
        fields: BASE_FIELDS,
    },
    OrganiserPreset {
        id: "exercise",
        label: "Exercise Planner",
        description: "Schedule workouts for the week.",
        time_based: true,
        type_filter: &["exercise"],
        fields: BASE_FIELDS,
    },
    OrganiserPreset {
        id: "task",
        label: "Task Planner",
        description: "Track tasks across the week.",
        time_based: true,
        type_filter: &["task"],
        fields: BASE_FIELDS,
    },
];

/// Looks a preset up by id, falling back to the default for unknown ids so a
/// stale saved setting can never leave the board without a preset.
pub fn find_preset(id: &str) -> &'static OrganiserPreset {
    PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .unwrap_or(&PRESETS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_fall_back_to_the_default_preset() {
        assert_eq!(find_preset("meal").id, "meal");
        assert_eq!(find_preset("no-such-preset").id, "weekly");
    }

    #[test]
    fn every_preset_exposes_the_type_field() {
        for preset in PRESETS {
            assert!(preset.fields.iter().any(|field| field.key == "type"));
            assert!(!preset.type_filter.is_empty());
        }
    }
}
