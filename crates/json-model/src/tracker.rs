//! Change tracker: snapshot copies, diff, equality and reset.

use indexmap::IndexMap;
use tracing::debug;

use crate::data::Data;
use crate::equal::{deep_equal_json, deep_equal_opt};
use crate::error::ModelError;
use crate::export::{export_from, ExportOptions};
use crate::model::Model;

/// An independent copy of `model` carrying every set field, excluded ones
/// included, with no snapshot and not frozen.
///
/// Nested instances are copied together with their own snapshots, so they
/// keep tracking changes after a clone or a reset.
pub(crate) fn detached_copy(model: &Model) -> Model {
    let mut copy = Model::empty(model.class());
    for (field, value) in model.values() {
        copy.assign(field.clone(), Some(detach(value)));
    }
    copy
}

fn tracked_copy(model: &Model) -> Model {
    let mut copy = detached_copy(model);
    copy.set_original(model.original().map(detached_copy));
    copy
}

fn detach(value: &Data) -> Data {
    match value {
        Data::Model(model) => Data::from(tracked_copy(model)),
        Data::Array(items) => Data::Array(items.iter().map(detach).collect()),
        Data::Object(obj) => {
            Data::Object(obj.iter().map(|(k, v)| (k.clone(), detach(v))).collect())
        }
        scalar => scalar.clone(),
    }
}

/// Fields of `a` whose values differ from the same field on `b`, with `a`'s
/// values. A field unset on `b` always differs.
pub(crate) fn diff(a: &Model, b: &Model) -> IndexMap<String, Data> {
    a.values()
        .iter()
        .filter(|(field, value)| !deep_equal_opt(Some(*value), b.get(field.as_str())))
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect()
}

/// Equality of the default exported forms.
pub(crate) fn is_equal(a: &Model, b: &Model) -> bool {
    let options = ExportOptions::default();
    deep_equal_json(&export_from(a, &options), &export_from(b, &options))
}

pub(crate) fn changes_since(model: &Model) -> IndexMap<String, Data> {
    match model.original() {
        Some(original) => diff(model, original),
        None => IndexMap::new(),
    }
}

/// Restores the snapshot's field set, read-only fields included. Fields set
/// after the snapshot was taken are unset. No-op without a snapshot.
pub(crate) fn reset(model: &mut Model) -> Result<(), ModelError> {
    model.ensure_mutable()?;
    let Some(restored) = model.original().map(detached_copy) else {
        return Ok(());
    };
    debug!(class = model.class().name(), "resetting to snapshot");
    model.replace_values(restored);
    Ok(())
}
