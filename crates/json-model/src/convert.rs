//! Structural key conversion for [`Data`] values.
//!
//! Model instances are opaque: `to_internal` returns them untouched and
//! `to_external` hands them to their own export.

use json_model_case::{to_external_key, to_internal_key};
use serde_json::{Map, Value};

use crate::data::Data;
use crate::export::{export_from, ExportOptions};

/// Converts every plain object key in `value` to its internal form.
pub fn to_internal(value: Data) -> Data {
    match value {
        Data::Array(items) => Data::Array(items.into_iter().map(to_internal).collect()),
        Data::Object(obj) => Data::Object(
            obj.into_iter()
                .map(|(key, val)| (to_internal_key(&key), to_internal(val)))
                .collect(),
        ),
        other => other,
    }
}

/// Converts `value` to plain JSON with external keys.
///
/// Nested models, wherever they sit, are exported with `options`.
pub fn to_external(value: &Data, options: &ExportOptions) -> Value {
    match value {
        Data::Model(model) => export_from(model, options),
        Data::Array(items) => Value::Array(items.iter().map(|v| to_external(v, options)).collect()),
        Data::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, val) in obj {
                out.insert(to_external_key(key), to_external(val, options));
            }
            Value::Object(out)
        }
        scalar => scalar.to_json(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_data_round_trip() {
        let raw = Data::from(json!({"home_address": {"zip_code": "1000"}, "tags": ["a_b"]}));
        let internal = to_internal(raw);
        assert_eq!(
            internal.to_json(),
            json!({"homeAddress": {"zipCode": "1000"}, "tags": ["a_b"]})
        );
        assert_eq!(
            to_external(&internal, &ExportOptions::default()),
            json!({"home_address": {"zip_code": "1000"}, "tags": ["a_b"]})
        );
    }
}
