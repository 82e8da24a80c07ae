//! json-model-equal - deep structural equality for JSON values.
//!
//! Equality is defined on values, never on identity or serialization: object
//! key order is ignored, array order is significant, and numbers compare by
//! their `serde_json::Number` representation (so `0` and `0.0` differ).

mod deep_equal;

pub use deep_equal::{deep_equal, deep_equal_opt};
