use serde_json::Value;

/// Performs a deep equality check between two JSON values.
///
/// # Examples
///
/// ```
/// use json_model_equal::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b.iter())
                    .all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }
        _ => false,
    }
}

/// Deep equality where either side may be absent.
///
/// Two absent values are equal; an absent value never equals a present one,
/// not even `null`.
pub fn deep_equal_opt(a: Option<&Value>, b: Option<&Value>) -> bool {
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
    fn absent_is_not_null() {
        assert!(deep_equal_opt(None, None));
        assert!(!deep_equal_opt(None, Some(&json!(null))));
        assert!(!deep_equal_opt(Some(&json!(null)), None));
    }

    #[test]
    fn present_values_delegate() {
        let a = json!({"x": [1, {"y": true}]});
        let b = json!({"x": [1, {"y": true}]});
        assert!(deep_equal_opt(Some(&a), Some(&b)));
    }
}
