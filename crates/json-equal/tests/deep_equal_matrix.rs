//! Equality matrix covering reflexivity, symmetry, type mismatches, nested
//! structures and the key-order sensitivity of `ordered_equal`.

use json_order_equal::{deep_equal, ordered_equal, Shape};
use serde_json::json;

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_scalars() {
    for v in [
        json!(null),
        json!(true),
        json!(42),
        json!(-1.5),
        json!("hello"),
    ] {
        assert!(deep_equal(&v, &v));
        assert!(ordered_equal(&v, &v));
    }
}

#[test]
fn reflexivity_containers() {
    let v = json!({"complex": [1, 2, {"nested": true}], "empty": {}, "list": []});
    assert!(deep_equal(&v, &v));
    assert!(ordered_equal(&v, &v));
}

// ---------------------------------------------------------------------------
// Symmetry
// ---------------------------------------------------------------------------

#[test]
fn symmetry_unequal_objects() {
    let a = json!({"x": 1});
    let b = json!({"x": 2});
    assert!(!deep_equal(&a, &b));
    assert!(!deep_equal(&b, &a));
}

#[test]
fn symmetry_extra_key() {
    let a = json!({"x": 1});
    let b = json!({"x": 1, "y": 2});
    assert!(!deep_equal(&a, &b));
    assert!(!deep_equal(&b, &a));
    assert!(!ordered_equal(&a, &b));
    assert!(!ordered_equal(&b, &a));
}

#[test]
fn symmetry_reordered_keys() {
    let a = json!({"x": 1, "y": 2});
    let b = json!({"y": 2, "x": 1});
    assert!(deep_equal(&a, &b));
    assert!(deep_equal(&b, &a));
    assert!(!ordered_equal(&a, &b));
    assert!(!ordered_equal(&b, &a));
}

// ---------------------------------------------------------------------------
// Type mismatches
// ---------------------------------------------------------------------------

#[test]
fn type_mismatch_matrix() {
    let values = [
        json!(null),
        json!(false),
        json!(0),
        json!(""),
        json!([]),
        json!({}),
    ];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(deep_equal(a, b), i == j, "{a} vs {b}");
            assert_eq!(Shape::same(a, b), i == j, "{a} vs {b}");
        }
    }
}

#[test]
fn integer_and_float_are_distinct_numbers() {
    assert!(!deep_equal(&json!(0.0), &json!(0)));
    assert!(Shape::same(&json!(0.0), &json!(0)));
}

// ---------------------------------------------------------------------------
// Nested structures
// ---------------------------------------------------------------------------

#[test]
fn nested_array_in_object() {
    assert!(deep_equal(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 2}]})));
    assert!(!deep_equal(&json!({"a": [1, {"b": 2}]}), &json!({"a": [1, {"b": 3}]})));
}

#[test]
fn nested_reordering_only_visible_to_ordered_equal() {
    let a = json!({"rows": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]});
    let b = json!({"rows": [{"name": "Alice", "id": 1}, {"id": 2, "name": "Bob"}]});
    assert!(deep_equal(&a, &b));
    assert!(!ordered_equal(&a, &b));
}

#[test]
fn ordered_equal_matches_pretty_printed_text() {
    let a = json!({"b": [1, {"d": null, "c": "x"}], "a": true});
    let b = json!({"b": [1, {"d": null, "c": "x"}], "a": true});
    let c = json!({"a": true, "b": [1, {"d": null, "c": "x"}]});
    let text = |v: &serde_json::Value| serde_json::to_string_pretty(v).unwrap();

    assert!(ordered_equal(&a, &b));
    assert_eq!(text(&a), text(&b));
    assert!(!ordered_equal(&a, &c));
    assert_ne!(text(&a), text(&c));

    let (negative, positive) = (json!({"zero": -0.0}), json!({"zero": 0.0}));
    assert!(deep_equal(&negative, &positive));
    assert!(!ordered_equal(&negative, &positive));
    assert_ne!(text(&negative), text(&positive));
}
