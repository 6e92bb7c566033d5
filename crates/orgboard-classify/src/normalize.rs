//! Frontmatter value normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use orgboard_model::{FieldType, FieldValue};
use serde_json::Value;

/// Canonical date format used when the mapping declares none.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalizes a raw frontmatter value according to the declared field type.
///
/// Returns `None` for absent values: JSON null and strings that are empty
/// after trimming. Everything else resolves deterministically per type, so
/// unknown shapes never depend on runtime type inspection downstream.
pub fn normalize_value(
    value: &Value,
    field_type: FieldType,
    date_format: Option<&str>,
) -> Option<FieldValue> {
    if value.is_null() {
        return None;
    }
    if let Value::String(raw) = value
        && raw.trim().is_empty()
    {
        return None;
    }
    match field_type {
        FieldType::Date => Some(normalize_date(
            value,
            date_format.unwrap_or(DEFAULT_DATE_FORMAT),
        )),
        FieldType::Boolean => Some(FieldValue::Flag(coerce_bool(value))),
        FieldType::Enum | FieldType::Text => {
            Some(FieldValue::Text(value_to_text(value).trim().to_string()))
        }
    }
}

fn normalize_date(value: &Value, format: &str) -> FieldValue {
    match value {
        Value::String(raw) => {
            let trimmed = raw.trim();
            // Already in target shape; skip the parse round-trip.
            if format == DEFAULT_DATE_FORMAT && is_canonical_date(trimmed) {
                return FieldValue::Text(trimmed.to_string());
            }
            match parse_date(trimmed) {
                Some(date) => FieldValue::Text(date.format(format).to_string()),
                None => FieldValue::Text(trimmed.to_string()),
            }
        }
        other => FieldValue::Text(value_to_text(other)),
    }
}

fn is_canonical_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| match idx {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            })
}

/// Accepts the date shapes seen in real vaults: plain dates, ISO datetimes
/// with or without offsets, and a few common regional spellings.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y", "%B %d, %Y"];
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(raw) => match raw.trim() {
            "true" | "yes" => true,
            "false" | "no" => false,
            other => !other.is_empty(),
        },
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(raw) => raw.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_dates_pass_through() {
        let value = normalize_value(&json!("2024-06-03"), FieldType::Date, None);
        assert_eq!(value, Some(FieldValue::Text("2024-06-03".to_string())));
    }

    #[test]
    fn datetime_strings_are_canonicalized() {
        let value = normalize_value(&json!("2024-06-03T14:30:00"), FieldType::Date, None);
        assert_eq!(value, Some(FieldValue::Text("2024-06-03".to_string())));
        let offset = normalize_value(&json!("2024-06-03T14:30:00+02:00"), FieldType::Date, None);
        assert_eq!(offset, Some(FieldValue::Text("2024-06-03".to_string())));
    }

    #[test]
    fn unparseable_dates_fall_back_to_the_literal() {
        let value = normalize_value(&json!("next tuesday"), FieldType::Date, None);
        assert_eq!(value, Some(FieldValue::Text("next tuesday".to_string())));
    }

    #[test]
    fn custom_date_format_is_honored() {
        let value = normalize_value(&json!("2024/06/03"), FieldType::Date, Some("%d.%m.%Y"));
        assert_eq!(value, Some(FieldValue::Text("03.06.2024".to_string())));
    }

    #[test]
    fn boolean_coercion_matches_the_marker_contract() {
        for truthy in [json!(true), json!("true"), json!("yes"), json!(1)] {
            assert_eq!(
                normalize_value(&truthy, FieldType::Boolean, None),
                Some(FieldValue::Flag(true)),
                "expected {truthy} to be true"
            );
        }
        for falsy in [json!(false), json!("false"), json!("no"), json!(0)] {
            assert_eq!(
                normalize_value(&falsy, FieldType::Boolean, None),
                Some(FieldValue::Flag(false)),
                "expected {falsy} to be false"
            );
        }
        // Anything else coerces by truthiness.
        assert_eq!(
            normalize_value(&json!("maybe"), FieldType::Boolean, None),
            Some(FieldValue::Flag(true))
        );
    }

    #[test]
    fn null_and_blank_strings_are_absent() {
        assert_eq!(normalize_value(&Value::Null, FieldType::Text, None), None);
        assert_eq!(normalize_value(&json!("   "), FieldType::Date, None), None);
    }

    #[test]
    fn enum_values_are_trimmed_strings() {
        assert_eq!(
            normalize_value(&json!("  recipe "), FieldType::Enum, None),
            Some(FieldValue::Text("recipe".to_string()))
        );
        assert_eq!(
            normalize_value(&json!(3), FieldType::Enum, None),
            Some(FieldValue::Text("3".to_string()))
        );
    }
}
