use std::cmp::Ordering;

use gridview::row::{Record, Value};
use gridview::sort::{compare_values, sorted_order, SortDirection};
use gridview::store::{Column, RowId, RowStore};

fn store_with(rows: Vec<Record>) -> RowStore {
    let mut store = RowStore::new(vec![Column::new("name"), Column::new("age")]);
    store.set_rows(rows);
    store
}

fn named(names: &[&str]) -> Vec<Record> {
    names.iter().map(|n| Record::new().set("name", *n)).collect()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_ascending_sorts_lexicographically() {
    let store = store_with(named(&["Bob", "Ann"]));
    let order = sorted_order(&store, "name", SortDirection::Ascending);
    assert_eq!(order, vec![RowId(1), RowId(0)]);
}

#[test]
fn test_descending_is_reverse_of_ascending_without_ties() {
    let store = store_with(named(&["Carol", "Ann", "Bob", "Dave"]));
    let asc = sorted_order(&store, "name", SortDirection::Ascending);
    let mut desc = sorted_order(&store, "name", SortDirection::Descending);
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_sorting_twice_is_idempotent() {
    let store = store_with(named(&["Carol", "Ann", "Bob"]));
    let first = sorted_order(&store, "name", SortDirection::Ascending);
    let second = sorted_order(&store, "name", SortDirection::Ascending);
    assert_eq!(first, second);
}

#[test]
fn test_store_is_not_mutated() {
    let store = store_with(named(&["Bob", "Ann"]));
    sorted_order(&store, "name", SortDirection::Ascending);
    assert_eq!(store.rows()[0].display_text("name"), "Bob");
    assert_eq!(store.rows()[1].display_text("name"), "Ann");
}

#[test]
fn test_stability_preserves_original_order_on_ties() {
    let rows = vec![
        Record::new().set("name", "Ann").set("age", 30i64),
        Record::new().set("name", "Bob").set("age", 30i64),
        Record::new().set("name", "Carol").set("age", 25i64),
        Record::new().set("name", "Dave").set("age", 30i64),
    ];
    let store = store_with(rows);
    let order = sorted_order(&store, "age", SortDirection::Ascending);
    // Carol first, then the three age-30 rows in their store order.
    assert_eq!(order, vec![RowId(2), RowId(0), RowId(1), RowId(3)]);
}

#[test]
fn test_numeric_sort_is_not_lexicographic() {
    let rows = vec![
        Record::new().set("age", 10i64),
        Record::new().set("age", 9i64),
        Record::new().set("age", 2.5),
    ];
    let store = store_with(rows);
    let order = sorted_order(&store, "age", SortDirection::Ascending);
    assert_eq!(order, vec![RowId(2), RowId(1), RowId(0)]);
}

#[test]
fn test_missing_field_sorts_first_ascending() {
    let rows = vec![
        Record::new().set("name", "Ann").set("age", 30i64),
        Record::new().set("name", "Bob"),
    ];
    let store = store_with(rows);
    let order = sorted_order(&store, "age", SortDirection::Ascending);
    assert_eq!(order, vec![RowId(1), RowId(0)]);
}

#[test]
fn test_mixed_types_do_not_panic() {
    let rows = vec![
        Record::new().set("age", "forty"),
        Record::new().set("age", 12i64),
        Record::new().set("age", true),
        Record::new().set("age", Value::Null),
    ];
    let store = store_with(rows);
    let order = sorted_order(&store, "age", SortDirection::Descending);
    assert_eq!(order.len(), 4);
}

#[test]
fn test_unknown_column_preserves_store_order() {
    let store = store_with(named(&["Bob", "Ann"]));
    let order = sorted_order(&store, "nothing", SortDirection::Ascending);
    assert_eq!(order, vec![RowId(0), RowId(1)]);
}

// ============================================================================
// Value comparison
// ============================================================================

#[test]
fn test_compare_int_against_float() {
    assert_eq!(
        compare_values(&Value::Int(2), &Value::Float(2.5)),
        Ordering::Less
    );
    assert_eq!(
        compare_values(&Value::Float(3.0), &Value::Int(3)),
        Ordering::Equal
    );
}

#[test]
fn test_compare_cross_type_is_total() {
    let values = [
        Value::Null,
        Value::Bool(true),
        Value::Int(1),
        Value::from("x"),
    ];
    for a in &values {
        for b in &values {
            let ab = compare_values(a, b);
            let ba = compare_values(b, a);
            assert_eq!(ab, ba.reverse());
        }
    }
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_direction_toggle_cycles() {
    assert_eq!(
        SortDirection::Ascending.toggled(),
        SortDirection::Descending
    );
    assert_eq!(
        SortDirection::Descending.toggled(),
        SortDirection::Ascending
    );
}

#[test]
fn test_direction_indicators() {
    assert_eq!(SortDirection::Ascending.indicator(), '▲');
    assert_eq!(SortDirection::Descending.indicator(), '▼');
}
