//! The static definition of a model type.
//!
//! A class is declared once through [`ModelClassBuilder`] and is immutable
//! afterwards. Classes are shared through `Arc`, usually from a process-wide
//! static:
//!
//! ```
//! use std::sync::{Arc, LazyLock};
//! use json_model::{ModelClass, Model};
//! use serde_json::json;
//!
//! static PROFILE: LazyLock<Arc<ModelClass>> =
//!     LazyLock::new(|| ModelClass::builder("Profile").field("bio").build());
//!
//! static USER: LazyLock<Arc<ModelClass>> = LazyLock::new(|| {
//!     ModelClass::builder("User")
//!         .fields(["id", "firstName"])
//!         .read_only("id")
//!         .nested("profile", || PROFILE.clone())
//!         .build()
//! });
//!
//! let user = Model::from_external(&USER, json!({"id": 1, "first_name": "A", "profile": {"bio": "x"}})).unwrap();
//! assert_eq!(user.get("firstName").and_then(|v| v.as_str()), Some("A"));
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::data::Data;
use crate::descriptor::{FieldDescriptor, FieldFragment};
use crate::error::BoxError;
use crate::model::Model;
use crate::registry::FieldRegistry;
use crate::validate::Validator;

/// Runs on an instance before or after its initial hydration.
pub type HookFn = Arc<dyn Fn(&mut Model) -> Result<(), BoxError> + Send + Sync>;

/// An immutable model class definition.
pub struct ModelClass {
    name: String,
    parent: Option<Arc<ModelClass>>,
    registry: FieldRegistry,
    descriptors: IndexMap<String, FieldDescriptor>,
    before_import: Option<HookFn>,
    after_import: Option<HookFn>,
    validator: Option<Arc<dyn Validator>>,
}

impl ModelClass {
    pub fn builder(name: impl Into<String>) -> ModelClassBuilder {
        ModelClassBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<ModelClass>> {
        self.parent.as_ref()
    }

    /// The fragments registered directly on this class.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Merged descriptors for every field, parents first.
    pub fn descriptors(&self) -> &IndexMap<String, FieldDescriptor> {
        &self.descriptors
    }

    pub fn descriptor(&self, field: &str) -> Option<&FieldDescriptor> {
        self.descriptors.get(field)
    }

    /// Field names in export order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.descriptors.contains_key(field)
    }

    /// Identity check: the same definition, or a definition with the same name.
    pub fn is(&self, other: &ModelClass) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }

    /// Whether instances of `self` count as instances of `ancestor`.
    pub fn is_subclass_of(&self, ancestor: &ModelClass) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.is(ancestor) {
                return true;
            }
            current = class.parent.as_deref();
        }
        false
    }

    pub(crate) fn before_import(&self) -> Option<&HookFn> {
        self.before_import.as_ref()
    }

    pub(crate) fn after_import(&self) -> Option<&HookFn> {
        self.after_import.as_ref()
    }

    pub(crate) fn validator(&self) -> Option<&Arc<dyn Validator>> {
        self.validator.as_ref()
    }
}

impl fmt::Debug for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClass")
            .field("name", &self.name)
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .field("fields", &self.descriptors.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Typed builder declaring the fields of a [`ModelClass`].
pub struct ModelClassBuilder {
    name: String,
    parent: Option<Arc<ModelClass>>,
    registry: FieldRegistry,
    before_import: Option<HookFn>,
    after_import: Option<HookFn>,
    validator: Option<Arc<dyn Validator>>,
}

impl ModelClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            registry: FieldRegistry::new(),
            before_import: None,
            after_import: None,
            validator: None,
        }
    }

    /// Inherits fields, descriptors, hooks and validator from `parent`.
    pub fn extends(mut self, parent: &Arc<ModelClass>) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.registry.declare(field);
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for field in fields {
            self.registry.declare(field);
        }
        self
    }

    /// Attaches a raw fragment to `field`.
    pub fn register(mut self, field: impl Into<String>, fragment: FieldFragment) -> Self {
        self.registry.register(field, fragment);
        self
    }

    /// Hydrates the field (or each element of an array) into `factory()`.
    pub fn nested<F>(self, field: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Arc<ModelClass> + Send + Sync + 'static,
    {
        self.register(field, FieldFragment::Nested(Arc::new(factory)))
    }

    /// Like [`nested`](Self::nested) for a class that is already built.
    pub fn nested_class(self, field: impl Into<String>, class: &Arc<ModelClass>) -> Self {
        let class = class.clone();
        self.nested(field, move || class.clone())
    }

    pub fn excluded(self, field: impl Into<String>) -> Self {
        self.register(field, FieldFragment::Excluded)
    }

    pub fn transform<F>(self, field: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Data) -> Result<Data, BoxError> + Send + Sync + 'static,
    {
        self.register(field, FieldFragment::Transform(Arc::new(transform)))
    }

    pub fn read_only(self, field: impl Into<String>) -> Self {
        self.register(field, FieldFragment::ReadOnly)
    }

    pub fn expose<I, S>(self, field: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups = groups.into_iter().map(Into::into).collect();
        self.register(field, FieldFragment::Expose(groups))
    }

    pub fn default_value<F>(self, field: impl Into<String>, provider: F) -> Self
    where
        F: Fn() -> Data + Send + Sync + 'static,
    {
        self.register(field, FieldFragment::Default(Arc::new(provider)))
    }

    pub fn before_import<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Model) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.before_import = Some(Arc::new(hook));
        self
    }

    pub fn after_import<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Model) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.after_import = Some(Arc::new(hook));
        self
    }

    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn build(self) -> Arc<ModelClass> {
        let parent_view = self.parent.as_ref().map(|p| &p.descriptors);
        let descriptors = self.registry.lookup(parent_view);
        let parent = self.parent.as_deref();
        let before_import = self
            .before_import
            .clone()
            .or_else(|| parent.and_then(|p| p.before_import.clone()));
        let after_import = self
            .after_import
            .clone()
            .or_else(|| parent.and_then(|p| p.after_import.clone()));
        let validator = self
            .validator
            .clone()
            .or_else(|| parent.and_then(|p| p.validator.clone()));
        Arc::new(ModelClass {
            name: self.name,
            parent: self.parent,
            registry: self.registry,
            descriptors,
            before_import,
            after_import,
            validator,
        })
    }
}

impl fmt::Debug for ModelClassBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClassBuilder")
            .field("name", &self.name)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
