//! Container traversal scenarios: ordered sequences, unordered sets, maps,
//! and single-value wrappers.

use super::{DifferenceKind, RecursiveComparisonConfiguration, RecursiveComparisonEngine};
use crate::value::{Object, Value};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn compare(actual: &Value, expected: &Value) -> Vec<super::Difference> {
    RecursiveComparisonEngine::standard()
        .compare(actual, expected, &RecursiveComparisonConfiguration::default())
        .unwrap()
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

fn map(entries: &[(&str, Value)]) -> Value {
    Value::Map(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[test]
fn test_lists_compare_positionally() {
    let actual = Value::List(ints(&[1, 2, 3]));
    let expected = Value::List(ints(&[1, 9, 3]));
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path.to_display_string(), "[1]");
    assert_eq!(differences[0].kind, DifferenceKind::ValueMismatch);
    assert_eq!(differences[0].actual, Value::Int(2));
    assert_eq!(differences[0].expected, Value::Int(9));
}

#[test]
fn test_list_length_mismatch_is_terminal() {
    let actual = Value::List(ints(&[1, 2]));
    let expected = Value::List(ints(&[9, 9, 9]));
    // One size difference at the list itself, nothing per element.
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 1);
    assert!(differences[0].path.is_root());
    assert_eq!(differences[0].kind, DifferenceKind::SizeMismatch);
}

#[test]
fn test_arrays_behave_like_lists() {
    let actual = Value::Array(ints(&[1, 2]));
    let expected = Value::Array(ints(&[1, 3]));
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path.to_display_string(), "[1]");
}

#[test]
fn test_sets_ignore_order() {
    let actual = Value::Set(ints(&[3, 1, 2]));
    let expected = Value::Set(ints(&[1, 2, 3]));
    assert_eq!(compare(&actual, &expected), vec![]);
}

#[test]
fn test_set_residuals_reported_at_set_path() {
    let holder = |set: Value| {
        Value::Object(Object::with_fields("Bag", vec![("items".into(), set)]))
    };
    let actual = holder(Value::Set(ints(&[1, 2])));
    let expected = holder(Value::Set(ints(&[2, 3])));
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 2);
    // Missing elements come first, each reported against the set's path with
    // a null placeholder on the side that lacks the element.
    assert_eq!(differences[0].path.to_display_string(), "items");
    assert_eq!(differences[0].kind, DifferenceKind::SetMismatch);
    assert_eq!(differences[0].actual, Value::Null);
    assert_eq!(differences[0].expected, Value::Int(3));
    assert_eq!(differences[1].actual, Value::Int(1));
    assert_eq!(differences[1].expected, Value::Null);
}

#[test]
fn test_set_multiplicity_matters() {
    let actual = Value::Set(ints(&[1, 1, 2]));
    let expected = Value::Set(ints(&[1, 2, 2]));
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 2);
    assert_eq!(differences[0].expected, Value::Int(2));
    assert_eq!(differences[1].actual, Value::Int(1));
}

#[test]
fn test_map_values_compared_per_key() {
    let actual = map(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
    let expected = map(&[("a", Value::Int(1)), ("b", Value::Int(9))]);
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path.to_display_string(), "[\"b\"]");
    assert_eq!(differences[0].kind, DifferenceKind::ValueMismatch);
}

#[test]
fn test_map_key_only_on_one_side() {
    let actual = map(&[("a", Value::Int(1)), ("only_actual", Value::Int(2))]);
    let expected = map(&[("a", Value::Int(1)), ("only_expected", Value::Int(3))]);
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 2);

    let only_actual = differences
        .iter()
        .find(|d| d.path.to_display_string() == "[\"only_actual\"]")
        .unwrap();
    assert_eq!(only_actual.kind, DifferenceKind::KeyMismatch);
    assert_eq!(only_actual.actual, Value::Int(2));
    assert_eq!(only_actual.expected, Value::Null);

    let only_expected = differences
        .iter()
        .find(|d| d.path.to_display_string() == "[\"only_expected\"]")
        .unwrap();
    assert_eq!(only_expected.kind, DifferenceKind::KeyMismatch);
    assert_eq!(only_expected.actual, Value::Null);
    assert_eq!(only_expected.expected, Value::Int(3));
}

#[test]
fn test_wrappers_are_transparent_to_patterns() {
    let holder = |inner: Value| {
        Value::Object(Object::with_fields(
            "Holder",
            vec![("payload".into(), Value::wrapped(inner))],
        ))
    };
    let actual = holder(Value::Int(1));
    let expected = holder(Value::Int(2));
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 1);
    // The wrapper level does not appear in the dotted path.
    assert_eq!(differences[0].path.to_display_string(), "payload");
}

#[test]
fn test_empty_wrapper_versus_full_wrapper() {
    let differences = compare(&Value::empty_wrapper(), &Value::wrapped(Value::Int(1)));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].kind, DifferenceKind::NullMismatch);
    assert_eq!(differences[0].actual, Value::Null);
    assert_eq!(differences[0].expected, Value::Int(1));
}

#[test]
fn test_both_wrappers_empty() {
    assert_eq!(compare(&Value::empty_wrapper(), &Value::empty_wrapper()), vec![]);
}

#[test]
fn test_nested_objects_in_lists() {
    let lineup = |number: i64| {
        Value::List(vec![Value::Object(Object::with_fields(
            "Player",
            vec![("number".into(), Value::Int(number))],
        ))])
    };
    let differences = compare(&lineup(7), &lineup(9));
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path.to_display_string(), "[0].number");
}

#[test]
fn test_null_elements_inside_lists() {
    let actual = Value::List(vec![Value::Null, Value::Int(2)]);
    let expected = Value::List(vec![Value::Int(1), Value::Int(2)]);
    let differences = compare(&actual, &expected);
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].path.to_display_string(), "[0]");
    assert_eq!(differences[0].kind, DifferenceKind::NullMismatch);
}

#[test]
fn test_type_name_mismatch_between_objects() {
    let actual = Value::Object(Object::with_fields(
        "Cat",
        vec![("name".into(), Value::from("Tom"))],
    ));
    let expected = Value::Object(Object::with_fields(
        "Dog",
        vec![("name".into(), Value::from("Tom"))],
    ));
    // Same shape, different declared types: the fields compare equal, so the
    // objects are considered recursively equal.
    assert_eq!(compare(&actual, &expected), vec![]);
}
