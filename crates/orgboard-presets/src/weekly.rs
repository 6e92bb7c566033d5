//! The weekly organiser board: ISO-week columns plus a marked catch-all.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Weekday};
use orgboard_index::{BoardRules, RecordFilter};
use orgboard_model::{
    BoardConfig, ColumnDef, FieldMapping, FieldType, Frontmatter, RecordMeta, record_basename,
};
use serde_json::Value;

use crate::item::{ItemKind, OrganiserItem, normalize_kind_list};
use crate::preset::OrganiserPreset;

/// Primary classification field: the day a record is scheduled for.
pub const DATE_FIELD: &str = "scheduled";
/// Legacy field still honoured when `scheduled` is absent.
pub const FALLBACK_FIELD: &str = "date";
/// Marker routing value-less records to the catch-all column.
pub const MARKER_FIELD: &str = "marked";

/// Columns for the ISO week `week_offset` weeks away from `today`: the
/// "Marked" catch-all first, then Monday through Sunday. Day column ids are
/// the dates themselves, which makes them double as the classification
/// values.
pub fn week_columns(today: NaiveDate, week_offset: i64) -> Vec<ColumnDef> {
    let start = (today + Duration::weeks(week_offset))
        .week(Weekday::Mon)
        .first_day();
    let mut columns = Vec::with_capacity(8);
    columns.push(ColumnDef::default_column("marked", "Marked"));
    for day in 0..7 {
        let date = start + Duration::days(day);
        let id = date.format("%Y-%m-%d").to_string();
        let title = date.format("%a %-d %b").to_string();
        columns.push(ColumnDef::new(id.clone(), title).with_value(id));
    }
    columns
}

/// Heading label for the displayed week, e.g. `Jun 3 - Jun 9, 2024`.
pub fn week_range_label(today: NaiveDate, week_offset: i64) -> String {
    let start = (today + Duration::weeks(week_offset))
        .week(Weekday::Mon)
        .first_day();
    let end = start + Duration::days(6);
    format!(
        "{} - {}",
        start.format("%b %-d"),
        end.format("%b %-d, %Y")
    )
}

/// Full board configuration for one preset and week.
pub fn weekly_config(
    today: NaiveDate,
    week_offset: i64,
    preset: &OrganiserPreset,
) -> BoardConfig {
    BoardConfig {
        board_id: "weekly-organiser".to_string(),
        name: preset.label.to_string(),
        columns: week_columns(today, week_offset),
        mapping: FieldMapping::new(DATE_FIELD, FieldType::Date)
            .with_fallback(FALLBACK_FIELD)
            .with_default_marker(MARKER_FIELD),
    }
}

/// First frontmatter type value admitted by the preset.
fn resolve_kind(frontmatter: &Frontmatter, allowed: &BTreeSet<String>) -> Option<ItemKind> {
    let value = frontmatter.get("type")?;
    normalize_kind_list(value)
        .into_iter()
        .find(|kind| allowed.contains(kind))
        .map(|kind| ItemKind::parse(&kind))
}

fn text_field(meta: &RecordMeta, name: &str) -> Option<String> {
    let text = meta.field(name).and_then(Value::as_str)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Selection and shaping rules for one preset: records are admitted when any
/// of their type values matches the preset's filter, and shaped into
/// [`OrganiserItem`]s for rendering.
pub fn organiser_rules(preset: &OrganiserPreset) -> BoardRules<OrganiserItem> {
    let allowed: Arc<BTreeSet<String>> = Arc::new(
        preset
            .type_filter
            .iter()
            .map(|value| (*value).to_string())
            .collect(),
    );
    let filter_types = Arc::clone(&allowed);
    let filter = RecordFilter::new().with_custom(move |_path, frontmatter| {
        resolve_kind(frontmatter, &filter_types).is_some()
    });
    BoardRules::new(filter, move |path, meta| {
        let kind = resolve_kind(&meta.frontmatter, &allowed).unwrap_or(ItemKind::Unknown);
        Ok(OrganiserItem {
            path: path.to_string(),
            title: text_field(meta, "title")
                .unwrap_or_else(|| record_basename(path).to_string()),
            kind,
            cover: text_field(meta, "cover").or_else(|| text_field(meta, "image")),
            scheduled: text_field(meta, DATE_FIELD),
            marked: meta.field(MARKER_FIELD).and_then(Value::as_bool) == Some(true),
        })
    })
}
