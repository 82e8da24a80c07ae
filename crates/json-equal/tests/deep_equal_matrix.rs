//! Deep equality matrix: reflexivity, symmetry, type mismatches, nesting and
//! the shapes produced by exporting models (ordered objects, arrays of
//! objects, nulls).

use json_model_equal::{deep_equal, deep_equal_opt};
use serde_json::json;

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_scalars() {
    for v in [json!(null), json!(true), json!(42), json!(1.5), json!("hello")] {
        assert!(deep_equal(&v, &v), "{v} should equal itself");
    }
}

#[test]
fn reflexivity_containers() {
    let v = json!({"id": 1, "posts": [{"title": "p1"}, {"title": "p2"}]});
    assert!(deep_equal(&v, &v));
    assert!(deep_equal(&json!([]), &json!([])));
    assert!(deep_equal(&json!({}), &json!({})));
}

// ---------------------------------------------------------------------------
// Symmetry
// ---------------------------------------------------------------------------

#[test]
fn symmetry_equal_objects() {
    let a = json!({"first_name": "A"});
    let b = json!({"first_name": "A"});
    assert!(deep_equal(&a, &b));
    assert!(deep_equal(&b, &a));
}

#[test]
fn symmetry_unequal_objects() {
    let a = json!({"first_name": "A"});
    let b = json!({"first_name": "B"});
    assert!(!deep_equal(&a, &b));
    assert!(!deep_equal(&b, &a));
}

// ---------------------------------------------------------------------------
// Type mismatches
// ---------------------------------------------------------------------------

#[test]
fn null_is_distinct_from_falsy_values() {
    for other in [json!(0), json!(false), json!(""), json!([]), json!({})] {
        assert!(!deep_equal(&json!(null), &other));
        assert!(!deep_equal(&other, &json!(null)));
    }
}

#[test]
fn type_mismatch_matrix() {
    assert!(!deep_equal(&json!(1), &json!("1")));
    assert!(!deep_equal(&json!(1), &json!(true)));
    assert!(!deep_equal(&json!("a"), &json!(["a"])));
    assert!(!deep_equal(&json!({}), &json!([])));
}

#[test]
fn integer_and_float_representations_differ() {
    assert!(deep_equal(&json!(0), &json!(0)));
    assert!(!deep_equal(&json!(0.0), &json!(0)));
    assert!(deep_equal(&json!(1.5), &json!(1.5)));
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn array_order_is_significant() {
    assert!(!deep_equal(&json!([1, 2, 3]), &json!([3, 2, 1])));
}

#[test]
fn array_length_mismatch() {
    assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
    assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 2])));
}

#[test]
fn array_of_exported_models() {
    let a = json!([{"title": "p1"}, {"title": "p2"}]);
    let b = json!([{"title": "p1"}, {"title": "p2"}]);
    let c = json!([{"title": "p1"}, {"title": "changed"}]);
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&a, &c));
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[test]
fn object_key_order_is_ignored() {
    assert!(deep_equal(
        &json!({"id": 1, "last_name": "B", "first_name": "A"}),
        &json!({"first_name": "A", "id": 1, "last_name": "B"})
    ));
}

#[test]
fn object_extra_or_different_key() {
    assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
}

#[test]
fn deeply_nested_unequal_leaf() {
    let a = json!({"profile": {"links": {"home": "x"}}});
    let b = json!({"profile": {"links": {"home": "y"}}});
    assert!(!deep_equal(&a, &b));
}

// ---------------------------------------------------------------------------
// Optional values
// ---------------------------------------------------------------------------

#[test]
fn optional_matrix() {
    let v = json!({"bio": "x"});
    assert!(deep_equal_opt(Some(&v), Some(&v.clone())));
    assert!(!deep_equal_opt(Some(&v), None));
    assert!(deep_equal_opt(None, None));
}
