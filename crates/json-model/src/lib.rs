//! Declarative data models for JSON APIs.
//!
//! A [`ModelClass`] declares the fields of a model type together with their
//! behavior: nested model types, transforms, read-only and excluded fields,
//! exposure groups and defaults. [`Model`] instances are hydrated from
//! external `snake_case` JSON, hold their values under internal `camelCase`
//! names, and export back to `snake_case` JSON.
//!
//! Every instance built from external input keeps a snapshot of its initial
//! state, which drives [`Model::get_changes_since`], [`Model::reset`] and
//! changed-only exports.
//!
//! ```
//! use json_model::{ExportOptions, Model, ModelClass};
//! use serde_json::json;
//!
//! let user = ModelClass::builder("User")
//!     .fields(["id", "firstName", "password"])
//!     .read_only("id")
//!     .excluded("password")
//!     .build();
//!
//! let mut model = Model::from_external(
//!     &user,
//!     json!({"id": 7, "first_name": "Ada", "password": "hunter2"}),
//! )
//! .unwrap();
//!
//! model.apply_external(json!({"id": 8, "first_name": "Grace"})).unwrap();
//! assert_eq!(
//!     model.to_external(&ExportOptions::default()),
//!     json!({"id": 7, "first_name": "Grace"})
//! );
//! assert_eq!(model.get_changes_since().keys().collect::<Vec<_>>(), vec!["firstName"]);
//! ```

mod class;
pub mod convert;
mod data;
mod descriptor;
pub mod equal;
mod error;
mod export;
mod import;
mod model;
mod registry;
mod tracker;
mod validate;

pub use class::{HookFn, ModelClass, ModelClassBuilder};
pub use data::Data;
pub use descriptor::{ClassFactory, DefaultFn, FieldDescriptor, FieldFragment, TransformFn};
pub use error::{BoxError, ModelError};
pub use export::ExportOptions;
pub use model::Model;
pub use registry::FieldRegistry;
pub use validate::{FieldError, Validator};

pub use json_model_case::{to_external_key, to_internal_key};
