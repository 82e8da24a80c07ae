use thiserror::Error;

/// Error type produced by user callbacks (transforms, hooks).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by model construction, hydration and mutation.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot mutate frozen {class} instance")]
    Frozen { class: String },
    #[error("{class} has no field `{field}`")]
    UnknownField { class: String, field: String },
    #[error("cannot hydrate {class} from {found}")]
    InvalidInput { class: String, found: String },
    /// The user transform's own error is kept untouched as `source`. Callers
    /// get it back through [`std::error::Error::source`] and `downcast_ref`.
    #[error("transform of {class}.{field} failed: {source}")]
    Transform {
        class: String,
        field: String,
        #[source]
        source: BoxError,
    },
    #[error("hydration hook of {class} failed: {source}")]
    Hook {
        class: String,
        #[source]
        source: BoxError,
    },
    #[error("field value does not match the requested type")]
    Deserialize(#[from] serde_json::Error),
}
