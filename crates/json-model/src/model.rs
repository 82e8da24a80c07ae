//! An instance of a [`ModelClass`].
//!
//! Holds the values of the class's set fields, the snapshot taken after the
//! first hydration from external input, and the one-way frozen flag.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::class::ModelClass;
use crate::data::Data;
use crate::error::ModelError;
use crate::export::{export_from, form_pairs, ExportOptions};
use crate::import::{self, Hydration};
use crate::tracker;
use crate::validate::{FieldError, Validator};

/// A model instance.
///
/// `Clone` copies everything, snapshot and frozen flag included;
/// [`clone_model`](Model::clone_model) produces a fresh, untracked copy.
#[derive(Clone)]
pub struct Model {
    class: Arc<ModelClass>,
    values: IndexMap<String, Data>,
    original: Option<Box<Model>>,
    frozen: bool,
}

impl Model {
    /// Creates an instance with every default provider applied.
    ///
    /// No import happens and no snapshot is taken.
    pub fn new(class: &Arc<ModelClass>) -> Self {
        let mut model = Self::empty(class);
        for (field, descriptor) in class.descriptors() {
            if let Some(provider) = &descriptor.default {
                model.values.insert(field.clone(), provider());
            }
        }
        model
    }

    pub(crate) fn empty(class: &Arc<ModelClass>) -> Self {
        Self {
            class: class.clone(),
            values: IndexMap::new(),
            original: None,
            frozen: false,
        }
    }

    /// Builds an instance from external (`snake_case`) input and snapshots it.
    pub fn from_external(class: &Arc<ModelClass>, raw: impl Into<Data>) -> Result<Self, ModelError> {
        import::create_from_external(class, raw.into(), false)
    }

    /// Like [`from_external`](Self::from_external), optionally without the
    /// snapshot.
    pub fn from_external_with(
        class: &Arc<ModelClass>,
        raw: impl Into<Data>,
        skip_snapshot: bool,
    ) -> Result<Self, ModelError> {
        import::create_from_external(class, raw.into(), skip_snapshot)
    }

    /// Builds a snapshotted instance from a JSON value.
    pub fn from_json(class: &Arc<ModelClass>, raw: Value) -> Result<Self, ModelError> {
        import::create_from_external(class, Data::from(raw), false)
    }

    pub fn class(&self) -> &Arc<ModelClass> {
        &self.class
    }

    pub fn get(&self, field: &str) -> Option<&Data> {
        self.values.get(field)
    }

    /// Deserializes a field into `T`. Unset fields yield `None`.
    pub fn get_as<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>, ModelError> {
        self.values
            .get(field)
            .map(|value| serde_json::from_value(value.to_json()))
            .transpose()
            .map_err(ModelError::from)
    }

    /// Set fields, in assignment order.
    pub fn values(&self) -> &IndexMap<String, Data> {
        &self.values
    }

    pub fn is_set(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Assigns a field directly.
    ///
    /// No key conversion, transform or read-only check applies; nested fields
    /// still coerce raw objects into instances.
    pub fn set(&mut self, field: &str, value: impl Into<Data>) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        let Some(descriptor) = self.class.descriptor(field) else {
            return Err(ModelError::UnknownField {
                class: self.class.name().to_string(),
                field: field.to_string(),
            });
        };
        let value = match descriptor.nested_class() {
            Some(nested) => import::coerce_nested(value.into(), &nested, Hydration::Update)?,
            None => Some(value.into()),
        };
        self.assign(field.to_string(), value);
        Ok(())
    }

    /// Unsets a field, returning its previous value.
    pub fn unset(&mut self, field: &str) -> Result<Option<Data>, ModelError> {
        self.ensure_mutable()?;
        Ok(self.values.shift_remove(field))
    }

    /// Imports external input after construction; read-only fields are
    /// left untouched.
    pub fn apply_external(&mut self, raw: impl Into<Data>) -> Result<(), ModelError> {
        import::import_into(self, raw.into(), Hydration::Update)
    }

    /// Applies a partial update. Same as [`apply_external`](Self::apply_external).
    pub fn merge(&mut self, partial: impl Into<Data>) -> Result<(), ModelError> {
        self.apply_external(partial)
    }

    /// Exports to external JSON.
    pub fn to_external(&self, options: &ExportOptions) -> Value {
        export_from(self, options)
    }

    /// Ordered `(key, value)` pairs for a multipart submission.
    pub fn to_form_submission(&self) -> Vec<(String, String)> {
        form_pairs(&self.to_external(&ExportOptions::default()))
    }

    /// A fresh copy with no snapshot, not frozen.
    pub fn clone_model(&self) -> Model {
        tracker::detached_copy(self)
    }

    /// Fields of `self` that differ from `other`, with `self`'s values.
    pub fn diff(&self, other: &Model) -> IndexMap<String, Data> {
        tracker::diff(self, other)
    }

    /// Equality of the exported forms; excluded fields never count.
    pub fn is_equal(&self, other: &Model) -> bool {
        tracker::is_equal(self, other)
    }

    /// Fields changed since the snapshot; empty without one.
    pub fn get_changes_since(&self) -> IndexMap<String, Data> {
        tracker::changes_since(self)
    }

    /// Restores the snapshot, read-only fields included.
    pub fn reset(&mut self) -> Result<(), ModelError> {
        tracker::reset(self)
    }

    /// Rejects every later mutation with [`ModelError::Frozen`].
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn has_snapshot(&self) -> bool {
        self.original.is_some()
    }

    /// The snapshot taken after the initial hydration.
    pub fn original(&self) -> Option<&Model> {
        self.original.as_deref()
    }

    /// Runs the class validator; no validator means no errors.
    pub fn validate(&self) -> Vec<FieldError> {
        match self.class.validator() {
            Some(validator) => validator.validate(self),
            None => Vec::new(),
        }
    }

    pub fn validate_with(&self, validator: &dyn Validator) -> Vec<FieldError> {
        validator.validate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub(crate) fn ensure_mutable(&self) -> Result<(), ModelError> {
        if self.frozen {
            debug!(class = self.class.name(), "rejecting mutation of frozen instance");
            return Err(ModelError::Frozen {
                class: self.class.name().to_string(),
            });
        }
        Ok(())
    }

    /// Stores `value`, or unsets the field for `None`.
    pub(crate) fn assign(&mut self, field: String, value: Option<Data>) {
        match value {
            Some(value) => {
                self.values.insert(field, value);
            }
            None => {
                self.values.shift_remove(&field);
            }
        }
    }

    pub(crate) fn capture_snapshot(&mut self) {
        debug!(class = self.class.name(), fields = self.values.len(), "capturing snapshot");
        self.original = Some(Box::new(tracker::detached_copy(self)));
    }

    pub(crate) fn set_original(&mut self, original: Option<Model>) {
        self.original = original.map(Box::new);
    }

    pub(crate) fn replace_values(&mut self, source: Model) {
        self.values = source.values;
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::model_equal(self, other)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("class", &self.class.name())
            .field("values", &self.values)
            .field("snapshot", &self.original.is_some())
            .field("frozen", &self.frozen)
            .finish()
    }
}

/// Serializes the default exported form.
impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_external(&ExportOptions::default()).serialize(serializer)
    }
}
