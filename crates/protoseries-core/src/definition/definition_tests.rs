#![allow(non_snake_case)]

use super::*;

#[test]
fn TypeDefinition___series_name___appends_series() {
    let def = TypeDefinition::new("OHLCV", vec!["Open".to_string()]);

    assert_eq!(def.series_name(), "OHLCVSeries");
}

#[test]
fn TypeDefinition___new___keeps_field_order_and_duplicates() {
    let fields = vec!["b".to_string(), "a".to_string(), "b".to_string()];

    let def = TypeDefinition::new("Pair", fields.clone());

    assert_eq!(def.fields, fields);
}

#[test]
fn TypeDefinition___no_fields___keeps_empty_field_list() {
    let def = TypeDefinition::new("Marker", Vec::new());

    assert!(def.fields.is_empty());
    assert_eq!(def.series_name(), "MarkerSeries");
}
