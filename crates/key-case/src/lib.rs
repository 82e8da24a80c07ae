//! Key conversion between the external `snake_case` convention and the
//! internal `camelCase` convention.
//!
//! Only ASCII letters take part in the conversion. The two key functions are
//! inverses for keys that follow the convention; keys with a digit after an
//! underscore (`line_1`), consecutive underscores (`a__b`) or uppercase
//! letters in external input (`First_Name`) are converted mechanically and
//! are not guaranteed to round-trip. Repeating a round-trip is always stable:
//! `to_internal_key(&to_external_key(&to_internal_key(k))) == to_internal_key(k)`.

use serde_json::{Map, Value};

/// Converts one external key to its internal form.
///
/// Every `_` immediately followed by an ASCII lowercase letter is removed and
/// the letter uppercased. Matches are taken left to right without overlap.
///
/// - `"first_name" -> "firstName"`
/// - `"a__b" -> "a_B"`
/// - `"line_1" -> "line_1"`
pub fn to_internal_key(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(ch);
    }
    out
}

/// Converts one internal key to its external form.
///
/// Every ASCII uppercase letter becomes `_` followed by its lowercase form.
///
/// - `"firstName" -> "first_name"`
/// - `"userID" -> "user_i_d"`
pub fn to_external_key(key: &str) -> String {
    if !key.chars().any(|c| c.is_ascii_uppercase()) {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Whether `key` survives `internal -> external -> internal` unchanged.
pub fn round_trips(key: &str) -> bool {
    to_internal_key(&to_external_key(key)) == key
}

/// Recursively converts every object key in `value` to its internal form.
///
/// Array elements are converted in place; scalars are returned unchanged.
pub fn to_internal(value: Value) -> Value {
    convert_keys(value, &to_internal_key)
}

/// Recursively converts every object key in `value` to its external form.
pub fn to_external(value: Value) -> Value {
    convert_keys(value, &to_external_key)
}

fn convert_keys(value: Value, key_fn: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_keys(item, key_fn))
                .collect(),
        ),
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, val) in obj {
                out.insert(key_fn(&key), convert_keys(val, key_fn));
            }
            Value::Object(out)
        }
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_matrix() {
        assert_eq!(to_internal_key("first_name"), "firstName");
        assert_eq!(to_internal_key("id"), "id");
        assert_eq!(to_internal_key("created_at_utc"), "createdAtUtc");
        assert_eq!(to_external_key("firstName"), "first_name");
        assert_eq!(to_external_key("createdAtUtc"), "created_at_utc");
        assert_eq!(to_external_key("id"), "id");
    }

    #[test]
    fn irregular_keys_are_converted_mechanically() {
        assert_eq!(to_internal_key("line_1"), "line_1");
        assert_eq!(to_internal_key("a__b"), "a_B");
        assert_eq!(to_internal_key("_private"), "Private");
        assert_eq!(to_internal_key("trailing_"), "trailing_");
        assert_eq!(to_external_key("userID"), "user_i_d");
        assert!(round_trips("userID"));
        assert!(round_trips("a_B"));
        assert!(!round_trips("first_name"));
    }

    #[test]
    fn structural_conversion() {
        let value = json!({"first_name": "A", "tags": [{"tag_name": "x"}], "n": 1});
        let internal = to_internal(value.clone());
        assert_eq!(
            internal,
            json!({"firstName": "A", "tags": [{"tagName": "x"}], "n": 1})
        );
        assert_eq!(to_external(internal), value);
    }

    #[test]
    fn scalars_are_untouched() {
        assert_eq!(to_internal(json!("snake_case_string")), json!("snake_case_string"));
        assert_eq!(to_external(json!(null)), json!(null));
    }
}
