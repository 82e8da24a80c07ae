//! Export engine: serializing instances to external JSON.

use serde_json::{Map, Value};

use json_model_case::to_external_key;

use crate::convert;
use crate::equal::deep_equal_opt;
use crate::model::Model;

/// Options controlling [`Model::to_external`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Exposure group requested by the caller.
    pub group: Option<String>,
    /// Emit only fields that differ from the snapshot.
    pub only_changed: bool,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options requesting one exposure group.
    pub fn group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::default()
        }
    }

    /// Options emitting changed fields only.
    pub fn changed() -> Self {
        Self {
            only_changed: true,
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn changed_only(mut self) -> Self {
        self.only_changed = true;
        self
    }
}

/// Exports the set fields of `model`, in declaration order.
pub(crate) fn export_from(model: &Model, options: &ExportOptions) -> Value {
    let class = model.class();
    let snapshot = if options.only_changed {
        model.original()
    } else {
        None
    };
    let mut out = Map::new();
    for (field, descriptor) in class.descriptors() {
        let Some(value) = model.get(field) else {
            continue;
        };
        if descriptor.excluded || !descriptor.is_exposed_to(options.group.as_deref()) {
            continue;
        }
        if let Some(original) = snapshot {
            if deep_equal_opt(Some(value), original.get(field)) {
                continue;
            }
        }
        out.insert(to_external_key(field), convert::to_external(value, options));
    }
    Value::Object(out)
}

/// Flattens an exported object into ordered form pairs.
///
/// Arrays become `key[index]` entries, strings are emitted raw, other scalars
/// in their JSON text, nested objects as compact JSON. `null` entries are
/// skipped.
pub(crate) fn form_pairs(exported: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let Value::Object(obj) = exported else {
        return pairs;
    };
    for (key, value) in obj {
        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let Some(text) = form_text(item) {
                        pairs.push((format!("{key}[{index}]"), text));
                    }
                }
            }
            other => {
                if let Some(text) = form_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn form_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_pairs_flatten_arrays() {
        let exported = json!({
            "title": "Hello",
            "tags": ["a", "b"],
            "count": 3,
            "draft": false,
            "meta": {"k": 1},
            "missing": null
        });
        assert_eq!(
            form_pairs(&exported),
            vec![
                ("title".to_string(), "Hello".to_string()),
                ("tags[0]".to_string(), "a".to_string()),
                ("tags[1]".to_string(), "b".to_string()),
                ("count".to_string(), "3".to_string()),
                ("draft".to_string(), "false".to_string()),
                ("meta".to_string(), r#"{"k":1}"#.to_string()),
            ]
        );
    }

    #[test]
    fn options_constructors() {
        assert_eq!(ExportOptions::group("admin").group.as_deref(), Some("admin"));
        assert!(ExportOptions::changed().only_changed);
        let both = ExportOptions::new().with_group("user").changed_only();
        assert_eq!(both.group.as_deref(), Some("user"));
        assert!(both.only_changed);
    }
}
