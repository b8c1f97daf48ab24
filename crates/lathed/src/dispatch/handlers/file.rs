//! Handlers for file-level operations: open/save/erase, window and
//! display control, listings and metadata.

use serde_json::Value;

use lathe_types::OpenInstructions;

use crate::engine::CadEngine;

use super::super::errors::DispatchError;
use super::super::{JsonMap, params, writers};
use super::model_pair;

pub(crate) fn open(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let dirname = params::string(input, "dirname", false)?;
    let (file, files) = model_pair(input)?;
    let generic = params::string(input, "generic", false)?;
    let display = params::flag(input, "display", false, false)?;
    let activate = params::flag(input, "activate", false, false)?;
    let new_window = params::flag(input, "new_window", false, false)?;
    let force_regen = params::flag(input, "force", false, false)?;

    if file.is_none() && files.is_none() {
        return Err(DispatchError::missing_parameter("model (or models)"));
    }

    let instructions = OpenInstructions {
        dirname,
        file,
        files,
        generic,
        display,
        activate,
        new_window,
        force_regen,
    };

    let outcome = engine.open(&instructions, session)?;

    let mut out = JsonMap::new();
    if let Some(result) = outcome {
        writers::put_opt_string(&mut out, "dirname", result.dirname.as_deref());
        writers::put_opt_strings(&mut out, "files", result.files);
        writers::put_positive(&mut out, "revision", result.revision);
    }
    Ok(Some(out))
}

pub(crate) fn open_errors(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let errors = engine.open_errors(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    out.insert("errors".to_owned(), Value::from(errors));
    Ok(Some(out))
}

pub(crate) fn rename(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let new_name = params::string(input, "new_name", true)?.unwrap_or_default();
    let only_session = params::flag(input, "only_session", false, false)?;

    let renamed = engine.rename(file.as_deref(), &new_name, only_session, session)?;

    let mut out = JsonMap::new();
    writers::put_opt_string(&mut out, "model", renamed.as_deref());
    Ok(Some(out))
}

pub(crate) fn save(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let (file, files) = model_pair(input)?;

    engine.save(file.as_deref(), files.as_deref(), session)?;

    Ok(None)
}

pub(crate) fn backup(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", true)?.unwrap_or_default();
    let target_dir = params::string(input, "target_dir", true)?.unwrap_or_default();

    engine.backup(&file, &target_dir, session)?;

    Ok(None)
}

pub(crate) fn erase(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let (file, files) = model_pair(input)?;
    let erase_children = params::flag(input, "erase_children", false, false)?;

    engine.erase(file.as_deref(), files.as_deref(), erase_children, session)?;

    Ok(None)
}

pub(crate) fn erase_not_displayed(
    engine: &dyn CadEngine,
    session: Option<&str>,
    _input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    engine.erase_not_displayed(session)?;

    Ok(None)
}

pub(crate) fn regenerate(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let (file, files) = model_pair(input)?;
    let display = params::flag(input, "display", false, false)?;

    engine.regenerate(file.as_deref(), files.as_deref(), display, session)?;

    Ok(None)
}

pub(crate) fn refresh(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    engine.refresh(file.as_deref(), session)?;

    Ok(None)
}

pub(crate) fn repaint(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    engine.repaint(file.as_deref(), session)?;

    Ok(None)
}

pub(crate) fn display(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", true)?.unwrap_or_default();
    let activate = params::flag(input, "activate", false, false)?;

    engine.display(&file, activate, session)?;

    Ok(None)
}

pub(crate) fn close_window(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    engine.close_window(file.as_deref(), session)?;

    Ok(None)
}

pub(crate) fn get_active(
    engine: &dyn CadEngine,
    session: Option<&str>,
    _input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let outcome = engine.get_active(session)?;

    let mut out = JsonMap::new();
    if let Some(result) = outcome {
        if result.has_file() {
            writers::put_opt_string(&mut out, "dirname", result.dirname.as_deref());
            let first = result.files.as_ref().and_then(|files| files.first());
            writers::put_opt_string(&mut out, "model", first.map(String::as_str));
        }
    }
    Ok(Some(out))
}

pub(crate) fn is_active(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", true)?.unwrap_or_default();

    let active = engine.is_active(&file, session)?;

    let mut out = JsonMap::new();
    out.insert("active".to_owned(), Value::from(active));
    Ok(Some(out))
}

pub(crate) fn list(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let (file, files) = model_pair(input)?;

    let listed = engine.list(file.as_deref(), files.as_deref(), session)?;

    let mut out = JsonMap::new();
    writers::put_opt_strings(&mut out, "files", listed);
    Ok(Some(out))
}

pub(crate) fn exists(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", true)?.unwrap_or_default();

    let found = engine.exists(&file, session)?;

    let mut out = JsonMap::new();
    out.insert("exists".to_owned(), Value::from(found));
    Ok(Some(out))
}

pub(crate) fn get_fileinfo(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let info = engine.get_fileinfo(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    if let Some(result) = info {
        writers::put_opt_string(&mut out, "dirname", result.dirname.as_deref());
        writers::put_opt_string(&mut out, "model", result.file.as_deref());
        writers::put_positive(&mut out, "revision", result.revision);
    }
    Ok(Some(out))
}

pub(crate) fn has_instances(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let found = engine.has_instances(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    out.insert("exists".to_owned(), Value::from(found));
    Ok(Some(out))
}

pub(crate) fn list_instances(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let listing = engine.list_instances(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    if let Some(result) = listing {
        writers::put_opt_string(&mut out, "dirname", result.dirname.as_deref());
        writers::put_opt_string(&mut out, "generic", result.generic.as_deref());
        // The instances list is a guaranteed key for this call: an absent
        // engine list still materialises as an empty sequence.
        out.insert(
            "files".to_owned(),
            Value::from(result.instances.unwrap_or_default()),
        );
    }
    Ok(Some(out))
}

pub(crate) fn list_simp_reps(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let rep = params::string(input, "rep", false)?;

    let reps = engine.list_simp_reps(file.as_deref(), rep.as_deref(), session)?;

    let mut out = JsonMap::new();
    writers::put_opt_strings(&mut out, "reps", reps);
    Ok(Some(out))
}
