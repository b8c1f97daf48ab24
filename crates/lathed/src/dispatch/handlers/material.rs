//! Handlers for material management operations.
//!
//! The non-wildcard variants (`get_cur_matl`, `list_materials`) are defined
//! for a single exact file and reject wildcard model names up front; the
//! `_wildcard` variants accept patterns and return per-file entry lists.

use serde_json::Value;

use crate::engine::CadEngine;

use super::super::errors::DispatchError;
use super::super::{JsonMap, params, writers};

fn reject_wildcards(file: Option<&str>) -> Result<(), DispatchError> {
    if params::is_pattern(file) {
        return Err(DispatchError::invalid_value(
            "model",
            "wildcards not allowed",
        ));
    }
    Ok(())
}

pub(crate) fn get_cur_matl(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    reject_wildcards(file.as_deref())?;

    let materials = engine.get_current_material(file.as_deref(), false, session)?;

    let mut out = JsonMap::new();
    let first = materials
        .as_deref()
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.material.as_deref());
    writers::put_opt_string(&mut out, "material", first);
    Ok(Some(out))
}

pub(crate) fn get_cur_matl_wildcard(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let include_non_matching = params::flag(input, "include_non_matching", false, false)?;

    let materials = engine.get_current_material(file.as_deref(), include_non_matching, session)?;

    let mut out = JsonMap::new();
    if let Some(entries) = materials {
        out.insert(
            "materials".to_owned(),
            Value::Array(writers::material_entries(&entries)),
        );
    }
    Ok(Some(out))
}

pub(crate) fn set_cur_matl(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let material = params::string(input, "material", true)?.unwrap_or_default();

    let files = engine.set_current_material(file.as_deref(), &material, session)?;

    let mut out = JsonMap::new();
    writers::put_opt_strings(&mut out, "files", files);
    Ok(Some(out))
}

pub(crate) fn list_materials(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    reject_wildcards(file.as_deref())?;
    let material = params::string(input, "material", false)?;

    let result = engine.list_materials(file.as_deref(), material.as_deref(), true, session)?;

    let mut out = JsonMap::new();
    if let Some(entries) = result {
        let names: Vec<Value> = entries
            .into_iter()
            .filter_map(|entry| entry.material.map(Value::from))
            .collect();
        out.insert("materials".to_owned(), Value::Array(names));
    }
    Ok(Some(out))
}

pub(crate) fn list_materials_wildcard(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let material = params::string(input, "material", false)?;
    let include_non_matching = params::flag(input, "include_non_matching", false, false)?;

    let result = engine.list_materials(
        file.as_deref(),
        material.as_deref(),
        include_non_matching,
        session,
    )?;

    let mut out = JsonMap::new();
    if let Some(entries) = result {
        out.insert(
            "materials".to_owned(),
            Value::Array(writers::material_entries(&entries)),
        );
    }
    Ok(Some(out))
}

pub(crate) fn load_matl_file(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let dirname = params::string(input, "dirname", false)?;
    let material = params::string(input, "material", true)?.unwrap_or_default();

    let files = engine.load_material_file(file.as_deref(), dirname.as_deref(), &material, session)?;

    let mut out = JsonMap::new();
    writers::put_opt_strings(&mut out, "models", files);
    Ok(Some(out))
}

pub(crate) fn delete_material(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let material = params::string(input, "material", true)?.unwrap_or_default();

    let files = engine.delete_material(file.as_deref(), &material, session)?;

    let mut out = JsonMap::new();
    writers::put_opt_strings(&mut out, "models", files);
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use lathe_types::MaterialEntry;

    use super::super::test_support::{MockEngine, record};
    use super::*;

    #[test]
    fn get_cur_matl_rejects_wildcards_before_the_engine_runs() {
        let engine = MockEngine::new();
        let error = get_cur_matl(&engine, None, &record(json!({ "model": "PART*.PRT" })))
            .expect_err("should fail");
        assert!(matches!(
            error,
            DispatchError::InvalidValue { ref name, ref message }
                if name == "model" && message.contains("wildcards")
        ));
    }

    #[test]
    fn get_cur_matl_returns_first_material_name() {
        let mut engine = MockEngine::new();
        engine.expect_get_current_material().once().returning(|_, _, _| {
            Ok(Some(vec![
                MaterialEntry::new("BOX.PRT", "STEEL"),
                MaterialEntry::new("LID.PRT", "BRASS"),
            ]))
        });

        let out = get_cur_matl(&engine, None, &record(json!({ "model": "BOX.PRT" })))
            .expect("should dispatch")
            .expect("returns a record");
        assert_eq!(Value::Object(out), json!({ "material": "STEEL" }));
    }

    #[test]
    fn wildcard_variant_accepts_patterns_and_lists_entries() {
        let mut engine = MockEngine::new();
        engine
            .expect_get_current_material()
            .withf(|file: &Option<&str>, include: &bool, _session| {
                *file == Some("PART*.PRT") && *include
            })
            .once()
            .returning(|_, _, _| Ok(Some(vec![MaterialEntry::new("PART1.PRT", "STEEL")])));

        let out = get_cur_matl_wildcard(
            &engine,
            None,
            &record(json!({ "model": "PART*.PRT", "include_non_matching": true })),
        )
        .expect("should dispatch")
        .expect("returns a record");

        assert_eq!(
            Value::Object(out),
            json!({ "materials": [{ "model": "PART1.PRT", "material": "STEEL" }] })
        );
    }

    #[test]
    fn list_materials_flattens_to_names() {
        let mut engine = MockEngine::new();
        engine.expect_list_materials().once().returning(|_, _, _, _| {
            Ok(Some(vec![
                MaterialEntry::new("BOX.PRT", "STEEL"),
                MaterialEntry {
                    file: Some("BOX.PRT".to_owned()),
                    material: None,
                },
            ]))
        });

        let out = list_materials(&engine, None, &record(json!({ "model": "BOX.PRT" })))
            .expect("should dispatch")
            .expect("returns a record");
        assert_eq!(Value::Object(out), json!({ "materials": ["STEEL"] }));
    }

    #[test]
    fn set_cur_matl_requires_material() {
        let engine = MockEngine::new();
        let error = set_cur_matl(&engine, None, &record(json!({ "model": "BOX.PRT" })))
            .expect_err("should fail");
        assert!(matches!(
            error,
            DispatchError::MissingParameter { ref name } if name == "material"
        ));
    }

    #[test]
    fn delete_material_lists_affected_models() {
        let mut engine = MockEngine::new();
        engine
            .expect_delete_material()
            .once()
            .returning(|_, _, _| Ok(Some(vec!["BOX.PRT".to_owned()])));

        let out = delete_material(
            &engine,
            None,
            &record(json!({ "model": "BOX.PRT", "material": "STEEL" })),
        )
        .expect("should dispatch")
        .expect("returns a record");
        assert_eq!(Value::Object(out), json!({ "models": ["BOX.PRT"] }));
    }
}
