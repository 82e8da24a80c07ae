//! The in-memory value stored in model fields.
//!
//! A JSON value extended with an opaque [`Model`] variant so nested instances
//! can live anywhere inside plain data. Key conversion never looks inside a
//! `Model`; its own import/export machinery owns its key shape.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::export::ExportOptions;
use crate::model::Model;

/// A field value: JSON data or a nested model instance.
#[derive(Debug, Clone, Default)]
pub enum Data {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Data>),
    Object(IndexMap<String, Data>),
    Model(Box<Model>),
}

impl Data {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Model(_) => "model",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Data]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Data>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Self::Model(model) => Some(model.as_ref()),
            _ => None,
        }
    }

    pub fn as_model_mut(&mut self) -> Option<&mut Model> {
        match self {
            Self::Model(model) => Some(model.as_mut()),
            _ => None,
        }
    }

    /// Converts to plain JSON without touching keys.
    ///
    /// Nested models appear in their default exported form.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Data::to_json).collect()),
            Self::Object(obj) => {
                let mut out = Map::with_capacity(obj.len());
                for (key, val) in obj {
                    out.insert(key.clone(), val.to_json());
                }
                Value::Object(out)
            }
            Self::Model(model) => model.to_external(&ExportOptions::default()),
        }
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::deep_equal(self, other)
    }
}

impl From<Value> for Data {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Data::from).collect()),
            Value::Object(obj) => {
                Self::Object(obj.into_iter().map(|(k, v)| (k, Data::from(v))).collect())
            }
        }
    }
}

impl From<Model> for Data {
    fn from(model: Model) -> Self {
        Self::Model(Box::new(model))
    }
}

impl From<Vec<Model>> for Data {
    fn from(models: Vec<Model>) -> Self {
        Self::Array(models.into_iter().map(Data::from).collect())
    }
}

impl From<Vec<Data>> for Data {
    fn from(items: Vec<Data>) -> Self {
        Self::Array(items)
    }
}

impl From<IndexMap<String, Data>> for Data {
    fn from(obj: IndexMap<String, Data>) -> Self {
        Self::Object(obj)
    }
}

impl From<bool> for Data {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i32> for Data {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for Data {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for Data {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl<T: Into<Data>> From<Option<T>> for Data {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_preserves_shape() {
        let data = Data::from(json!({"a": [1, "x", null], "b": {"c": true}}));
        let obj = data.as_object().unwrap();
        assert_eq!(obj["a"].as_array().unwrap().len(), 3);
        assert_eq!(obj["b"].as_object().unwrap()["c"].as_bool(), Some(true));
        assert_eq!(data.to_json(), json!({"a": [1, "x", null], "b": {"c": true}}));
    }

    #[test]
    fn scalar_accessors() {
        assert_eq!(Data::from(7).as_i64(), Some(7));
        assert_eq!(Data::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Data::from("s").as_str(), Some("s"));
        assert!(Data::from(f64::NAN).is_null());
        assert!(Data::from(None::<i64>).is_null());
        assert_eq!(Data::from(Some("x")).kind(), "string");
    }
}
