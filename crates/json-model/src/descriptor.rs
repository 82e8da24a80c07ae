//! Field descriptors and the fragments they are assembled from.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::class::ModelClass;
use crate::data::Data;
use crate::error::BoxError;

/// Produces the class a nested field is hydrated into.
///
/// A factory rather than a direct reference so a class can nest itself.
pub type ClassFactory = Arc<dyn Fn() -> Arc<ModelClass> + Send + Sync>;

/// Maps a raw imported value to its stored form.
pub type TransformFn = Arc<dyn Fn(Data) -> Result<Data, BoxError> + Send + Sync>;

/// Produces a fresh default value at construction time.
pub type DefaultFn = Arc<dyn Fn() -> Data + Send + Sync>;

/// One piece of declared behavior for a field.
///
/// Fragments registered for the same field accumulate. A later fragment of
/// the same kind replaces the earlier one, except `Expose`, whose groups are
/// unioned.
#[derive(Clone)]
pub enum FieldFragment {
    Nested(ClassFactory),
    Excluded,
    Transform(TransformFn),
    ReadOnly,
    Expose(Vec<String>),
    Default(DefaultFn),
}

impl FieldFragment {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nested(_) => "nested",
            Self::Excluded => "excluded",
            Self::Transform(_) => "transform",
            Self::ReadOnly => "read_only",
            Self::Expose(_) => "expose",
            Self::Default(_) => "default",
        }
    }
}

impl fmt::Debug for FieldFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expose(groups) => f.debug_tuple("Expose").field(groups).finish(),
            other => f.write_str(other.kind()),
        }
    }
}

/// The merged behavior of one field of a class.
#[derive(Clone, Default)]
pub struct FieldDescriptor {
    pub nested: Option<ClassFactory>,
    pub excluded: bool,
    pub transform: Option<TransformFn>,
    pub read_only: bool,
    pub groups: BTreeSet<String>,
    pub default: Option<DefaultFn>,
}

impl FieldDescriptor {
    /// Folds one fragment into the descriptor.
    pub fn apply(&mut self, fragment: &FieldFragment) {
        match fragment {
            FieldFragment::Nested(factory) => self.nested = Some(factory.clone()),
            FieldFragment::Excluded => self.excluded = true,
            FieldFragment::Transform(transform) => self.transform = Some(transform.clone()),
            FieldFragment::ReadOnly => self.read_only = true,
            FieldFragment::Expose(groups) => self.groups.extend(groups.iter().cloned()),
            FieldFragment::Default(default) => self.default = Some(default.clone()),
        }
    }

    /// Resolves the nested class, if the field has one.
    pub fn nested_class(&self) -> Option<Arc<ModelClass>> {
        self.nested.as_ref().map(|factory| factory())
    }

    /// Whether the field is emitted for the requested exposure group.
    ///
    /// Fields without groups are always exposed. Fields with groups are
    /// exposed only to a matching group, never to an export without one.
    pub fn is_exposed_to(&self, group: Option<&str>) -> bool {
        if self.groups.is_empty() {
            return true;
        }
        group.is_some_and(|g| self.groups.contains(g))
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("nested", &self.nested_class().map(|c| c.name().to_string()))
            .field("excluded", &self.excluded)
            .field("transform", &self.transform.is_some())
            .field("read_only", &self.read_only)
            .field("groups", &self.groups)
            .field("default", &self.default.is_some())
            .finish()
    }
}
