use orgboard_classify::{ColumnLookup, classify, read_field};
use orgboard_model::{ColumnDef, ColumnId, FieldMapping, FieldType, FieldValue, Frontmatter};
use serde_json::json;

fn weekly_mapping() -> FieldMapping {
    FieldMapping::new("scheduled", FieldType::Date)
        .with_fallback("date")
        .with_default_marker("marked")
}

fn weekly_columns() -> Vec<ColumnDef> {
    let mut columns = vec![ColumnDef::default_column("marked", "Marked")];
    for day in 3..=9 {
        let id = format!("2024-06-{day:02}");
        columns.push(ColumnDef::new(id.as_str(), id.as_str()).with_value(id.as_str()));
    }
    columns
}

fn frontmatter(pairs: &[(&str, serde_json::Value)]) -> Frontmatter {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[test]
fn scheduled_date_routes_to_its_day_column() {
    let columns = weekly_columns();
    let lookup = ColumnLookup::new(&columns);
    let fm = frontmatter(&[("scheduled", json!("2024-06-03"))]);
    assert_eq!(
        classify(&fm, &weekly_mapping(), &lookup),
        Some(ColumnId::new("2024-06-03"))
    );
}

#[test]
fn marker_without_value_routes_to_default_column() {
    let columns = weekly_columns();
    let lookup = ColumnLookup::new(&columns);
    let fm = frontmatter(&[("marked", json!(true))]);
    assert_eq!(
        classify(&fm, &weekly_mapping(), &lookup),
        Some(ColumnId::new("marked"))
    );
}

#[test]
fn empty_frontmatter_is_unmapped() {
    let columns = weekly_columns();
    let lookup = ColumnLookup::new(&columns);
    assert_eq!(classify(&Frontmatter::new(), &weekly_mapping(), &lookup), None);
}

#[test]
fn concrete_value_wins_over_the_marker() {
    let columns = weekly_columns();
    let lookup = ColumnLookup::new(&columns);
    let fm = frontmatter(&[("scheduled", json!("2024-06-05")), ("marked", json!(true))]);
    assert_eq!(
        classify(&fm, &weekly_mapping(), &lookup),
        Some(ColumnId::new("2024-06-05"))
    );
}

#[test]
fn value_matching_no_column_is_unmapped_not_defaulted() {
    let columns = weekly_columns();
    let lookup = ColumnLookup::new(&columns);
    // Outside the configured week, even with the marker raised.
    let fm = frontmatter(&[("scheduled", json!("2024-07-01")), ("marked", json!(true))]);
    assert_eq!(classify(&fm, &weekly_mapping(), &lookup), None);
}

#[test]
fn fallback_field_is_read_when_primary_is_absent_or_blank() {
    let mapping = weekly_mapping();
    let fm = frontmatter(&[("date", json!("2024-06-04"))]);
    assert_eq!(
        read_field(&fm, &mapping),
        Some(FieldValue::Text("2024-06-04".to_string()))
    );
    let blank = frontmatter(&[("scheduled", json!("  ")), ("date", json!("2024-06-04"))]);
    assert_eq!(
        read_field(&blank, &mapping),
        Some(FieldValue::Text("2024-06-04".to_string()))
    );
}

#[test]
fn first_declared_column_wins_on_duplicate_values() {
    let columns = vec![
        ColumnDef::new("first", "First").with_value("dup"),
        ColumnDef::new("second", "Second").with_value("dup"),
    ];
    let lookup = ColumnLookup::new(&columns);
    let fm = frontmatter(&[("status", json!("dup"))]);
    let mapping = FieldMapping::new("status", FieldType::Enum);
    assert_eq!(classify(&fm, &mapping, &lookup), Some(ColumnId::new("first")));
}

#[test]
fn falsy_marker_does_not_route_to_default() {
    let columns = weekly_columns();
    let lookup = ColumnLookup::new(&columns);
    for falsy in [json!(false), json!("no"), json!(0)] {
        let fm = frontmatter(&[("marked", falsy)]);
        assert_eq!(classify(&fm, &weekly_mapping(), &lookup), None);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_value() -> impl Strategy<Value = serde_json::Value> {
        prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::from),
            any::<i32>().prop_map(serde_json::Value::from),
            "[a-z0-9 -]{0,12}".prop_map(serde_json::Value::from),
        ]
    }

    proptest! {
        // A record maps to at most one column, and a mapped record either
        // matched a declared value exactly or was routed to the default
        // column with no value present.
        #[test]
        fn classification_is_consistent(
            scheduled in arb_value(),
            date in arb_value(),
            marked in arb_value(),
        ) {
            let columns = weekly_columns();
            let lookup = ColumnLookup::new(&columns);
            let mapping = weekly_mapping();
            let fm = frontmatter(&[
                ("scheduled", scheduled),
                ("date", date),
                ("marked", marked),
            ]);

            let resolved = classify(&fm, &mapping, &lookup);
            let value = read_field(&fm, &mapping);
            if let Some(column_id) = resolved {
                let column = columns
                    .iter()
                    .find(|column| column.id == column_id)
                    .expect("classified into a declared column");
                if column.is_default {
                    prop_assert!(value.is_none());
                } else {
                    prop_assert_eq!(column.field_value.as_ref(), value.as_ref());
                }
            }
        }
    }
}
