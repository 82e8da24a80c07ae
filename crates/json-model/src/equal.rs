//! Structural equality over [`Data`].
//!
//! Plain JSON comparison is re-exported from `json-model-equal`; this module
//! extends it to values that may hold nested model instances.

use crate::data::Data;
use crate::model::Model;

pub use json_model_equal::{deep_equal as deep_equal_json, deep_equal_opt as deep_equal_json_opt};

/// Deep equality between two field values.
///
/// Models are equal when they share a class and every set field is deeply
/// equal; snapshots and the frozen flag take no part in the comparison.
pub fn deep_equal(a: &Data, b: &Data) -> bool {
    match (a, b) {
        (Data::Null, Data::Null) => true,
        (Data::Bool(a), Data::Bool(b)) => a == b,
        (Data::Number(a), Data::Number(b)) => a == b,
        (Data::String(a), Data::String(b)) => a == b,
        (Data::Array(arr_a), Data::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b.iter())
                    .all(|(x, y)| deep_equal(x, y))
        }
        (Data::Object(obj_a), Data::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }
        (Data::Model(a), Data::Model(b)) => model_equal(a, b),
        _ => false,
    }
}

/// Structural equality of two instances: same class, deeply equal set fields.
pub fn model_equal(a: &Model, b: &Model) -> bool {
    if !a.class().is(b.class()) {
        return false;
    }
    let (fields_a, fields_b) = (a.values(), b.values());
    if fields_a.len() != fields_b.len() {
        return false;
    }
    fields_a.iter().all(|(key, val_a)| match fields_b.get(key) {
        Some(val_b) => deep_equal(val_a, val_b),
        None => false,
    })
}

/// Deep equality where either side may be unset.
pub fn deep_equal_opt(a: Option<&Data>, b: Option<&Data>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => deep_equal(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_key_order_is_ignored() {
        let a = Data::from(json!({"x": 1, "y": [true]}));
        let b = Data::from(json!({"y": [true], "x": 1}));
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn unset_is_not_null() {
        assert!(!deep_equal_opt(None, Some(&Data::Null)));
        assert!(deep_equal_opt(None, None));
    }

    #[test]
    fn json_helpers_are_reexported() {
        assert!(deep_equal_json(&json!([1]), &json!([1])));
        assert!(!deep_equal_json_opt(Some(&json!(1)), None));
    }
}
