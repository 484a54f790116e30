use chrono::NaiveDate;
use gridkit::{CellValue, Money, SelectAllScope};
use rust_decimal::Decimal;
use serde_json::json;

// ============================================================================
// Money
// ============================================================================

#[test]
fn test_money_serializes_as_bare_decimal() {
    assert_eq!(serde_json::to_value(Money::from_int(779)).unwrap(), json!("779"));
}

#[test]
fn test_money_deserializes_from_string_or_number() {
    let from_str: Money = serde_json::from_str("\"12.5\"").unwrap();
    assert_eq!(from_str, Money::new(Decimal::new(125, 1)));
    let from_int: Money = serde_json::from_str("40").unwrap();
    assert_eq!(from_int, Money::from_int(40));
}

// ============================================================================
// Cell values
// ============================================================================

#[test]
fn test_cell_values_serialize_untagged() {
    let date = NaiveDate::from_ymd_opt(2023, 7, 18).unwrap();
    let value = CellValue::List(vec![
        CellValue::Null,
        CellValue::Bool(true),
        CellValue::Int(2),
        CellValue::Text("Carrot".into()),
        CellValue::Date(date),
        CellValue::Money(Money::from_int(200)),
    ]);
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!([null, true, 2, "Carrot", "2023-07-18", "200"])
    );
}

// ============================================================================
// Select-all scope
// ============================================================================

#[test]
fn test_select_all_scope_names() {
    assert_eq!(serde_json::to_value(SelectAllScope::AllRows).unwrap(), json!("all_rows"));
    assert_eq!(
        serde_json::to_value(SelectAllScope::FilteredRows).unwrap(),
        json!("filtered_rows")
    );
    let scope: SelectAllScope = serde_json::from_str("\"filtered_rows\"").unwrap();
    assert_eq!(scope, SelectAllScope::FilteredRows);
    assert!(serde_json::from_str::<SelectAllScope>("\"filtered\"").is_err());
}
