//! Validation contract.
//!
//! The engine never interprets a [`FieldError`]; it only asks whether the
//! list returned by a [`Validator`] is empty.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::Model;

/// A failed field, keyed by its internal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    /// Constraint name to message.
    pub constraints: IndexMap<String, String>,
    /// Errors of nested instances.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldError>,
}

impl FieldError {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    pub fn constraint(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.constraints.insert(name.into(), message.into());
        self
    }

    pub fn child(mut self, error: FieldError) -> Self {
        self.children.push(error);
        self
    }
}

/// An external validation library.
pub trait Validator: Send + Sync {
    fn validate(&self, model: &Model) -> Vec<FieldError>;
}

impl<F> Validator for F
where
    F: Fn(&Model) -> Vec<FieldError> + Send + Sync,
{
    fn validate(&self, model: &Model) -> Vec<FieldError> {
        self(model)
    }
}
