//! Import engine: hydrating instances from external input.

use std::sync::Arc;

use tracing::trace;

use crate::class::ModelClass;
use crate::convert;
use crate::data::Data;
use crate::error::ModelError;
use crate::model::Model;

/// Which hydration an import belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hydration {
    /// The construction import; read-only fields are assigned.
    Initial,
    /// Any later import; read-only fields are left alone.
    Update,
}

/// Imports `raw` into `model`.
///
/// `null` input is a no-op, any other non-object is rejected. Keys unknown to
/// the class are dropped. Every value is converted before the first one is
/// assigned, so a failing transform or nested construction leaves `model`
/// untouched.
pub(crate) fn import_into(model: &mut Model, raw: Data, mode: Hydration) -> Result<(), ModelError> {
    model.ensure_mutable()?;
    let input = match convert::to_internal(raw) {
        Data::Null => return Ok(()),
        Data::Object(obj) => obj,
        other => {
            return Err(ModelError::InvalidInput {
                class: model.class().name().to_string(),
                found: other.kind().to_string(),
            })
        }
    };
    let class = model.class().clone();
    let mut staged = Vec::with_capacity(input.len());
    for (field, raw_value) in input {
        let Some(descriptor) = class.descriptor(&field) else {
            trace!(class = class.name(), field = %field, "dropping unknown key");
            continue;
        };
        if descriptor.read_only && mode == Hydration::Update {
            trace!(class = class.name(), field = %field, "skipping read-only field");
            continue;
        }
        let value = match &descriptor.transform {
            Some(transform) => transform(raw_value).map_err(|source| ModelError::Transform {
                class: class.name().to_string(),
                field: field.clone(),
                source,
            })?,
            None => raw_value,
        };
        let value = match descriptor.nested_class() {
            Some(nested) => coerce_nested(value, &nested, mode)?,
            None => Some(value),
        };
        staged.push((field, value));
    }
    for (field, value) in staged {
        model.assign(field, value);
    }
    Ok(())
}

/// Coerces a value into instances of `class`.
///
/// Arrays are coerced element-wise; `null` leaves the field unset. Instances
/// built for an [`Hydration::Update`] carry no snapshot of their own, so a
/// changed-only export emits them in full.
pub(crate) fn coerce_nested(
    value: Data,
    class: &Arc<ModelClass>,
    mode: Hydration,
) -> Result<Option<Data>, ModelError> {
    match value {
        Data::Null => Ok(None),
        Data::Array(items) => {
            let models = items
                .into_iter()
                .map(|item| instantiate(item, class, mode).map(Data::from))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(Data::Array(models)))
        }
        single => instantiate(single, class, mode).map(|m| Some(Data::from(m))),
    }
}

/// Passes existing instances of `class` through; builds the rest.
fn instantiate(value: Data, class: &Arc<ModelClass>, mode: Hydration) -> Result<Model, ModelError> {
    match value {
        Data::Model(model) if model.class().is_subclass_of(class) => Ok(*model),
        Data::Model(model) => Err(ModelError::InvalidInput {
            class: class.name().to_string(),
            found: format!("{} instance", model.class().name()),
        }),
        raw => create_from_external(class, raw, mode == Hydration::Update),
    }
}

/// Builds a fresh instance of `class` from external input.
///
/// Defaults, the pre-hydration hook, the initial import, the post-hydration
/// hook and, unless `skip_snapshot`, snapshot capture run in that order.
pub(crate) fn create_from_external(
    class: &Arc<ModelClass>,
    raw: Data,
    skip_snapshot: bool,
) -> Result<Model, ModelError> {
    let mut model = Model::new(class);
    if let Some(hook) = class.before_import() {
        hook(&mut model).map_err(|source| ModelError::Hook {
            class: class.name().to_string(),
            source,
        })?;
    }
    import_into(&mut model, raw, Hydration::Initial)?;
    if let Some(hook) = class.after_import() {
        hook(&mut model).map_err(|source| ModelError::Hook {
            class: class.name().to_string(),
            source,
        })?;
    }
    if !skip_snapshot {
        model.capture_snapshot();
    }
    Ok(model)
}
