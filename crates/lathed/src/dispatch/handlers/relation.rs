//! Handlers for relation get/set operations, including the post-regenerate
//! variants.

use serde_json::Value;

use crate::engine::CadEngine;

use super::super::errors::DispatchError;
use super::super::{JsonMap, params};

fn relations_input(input: &JsonMap) -> Result<Option<Vec<String>>, DispatchError> {
    params::get(input, "relations", false)?
        .map(|value| params::string_list(value, "relations"))
        .transpose()
}

fn write_relations(relations: Option<Vec<String>>) -> JsonMap {
    let mut out = JsonMap::new();
    // The key is omitted entirely when the model has no relations.
    if let Some(lines) = relations {
        if !lines.is_empty() {
            out.insert("relations".to_owned(), Value::from(lines));
        }
    }
    out
}

pub(crate) fn relations_get(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let relations = engine.get_relations(file.as_deref(), session)?;

    Ok(Some(write_relations(relations)))
}

pub(crate) fn relations_set(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let relations = relations_input(input)?;

    engine.set_relations(file.as_deref(), relations.as_deref(), session)?;

    Ok(None)
}

pub(crate) fn postregen_relations_get(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let relations = engine.get_postregen_relations(file.as_deref(), session)?;

    Ok(Some(write_relations(relations)))
}

pub(crate) fn postregen_relations_set(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let relations = relations_input(input)?;

    engine.set_postregen_relations(file.as_deref(), relations.as_deref(), session)?;

    Ok(None)
}
