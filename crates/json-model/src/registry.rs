//! Declared fields and their descriptor fragments.
//!
//! Each class owns one registry. Registration only appends; [`lookup`]
//! folds the fragments over the parent's merged view, so a subclass sees its
//! parent's fields first and its own declarations on top.
//!
//! [`lookup`]: FieldRegistry::lookup

use indexmap::IndexMap;

use crate::descriptor::{FieldDescriptor, FieldFragment};

/// Registration table for the fields of one class.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: Vec<String>,
    fragments: Vec<(String, FieldFragment)>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a plain field. Declaring twice keeps the first position.
    pub fn declare(&mut self, field: impl Into<String>) {
        let field = field.into();
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    /// Attaches a fragment to `field`, declaring it if needed.
    pub fn register(&mut self, field: impl Into<String>, fragment: FieldFragment) {
        let field = field.into();
        self.declare(field.clone());
        self.fragments.push((field, fragment));
    }

    /// Declared field names, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn fragments(&self) -> &[(String, FieldFragment)] {
        &self.fragments
    }

    /// Merged view of this registry over `parent`.
    ///
    /// Parent fields keep their order; new fields follow in declaration order.
    pub fn lookup(
        &self,
        parent: Option<&IndexMap<String, FieldDescriptor>>,
    ) -> IndexMap<String, FieldDescriptor> {
        let mut merged = parent.cloned().unwrap_or_default();
        for field in &self.fields {
            merged.entry(field.clone()).or_default();
        }
        for (field, fragment) in &self.fragments {
            if let Some(descriptor) = merged.get_mut(field) {
                descriptor.apply(fragment);
            }
        }
        merged
    }
}
