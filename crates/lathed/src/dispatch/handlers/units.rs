//! Handlers for unit and unit-system operations.

use crate::engine::CadEngine;

use super::super::errors::DispatchError;
use super::super::{JsonMap, params, writers};

pub(crate) fn get_length_units(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let units = engine.get_length_units(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    writers::put_opt_string(&mut out, "units", units.as_deref());
    Ok(Some(out))
}

pub(crate) fn get_mass_units(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let units = engine.get_mass_units(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    writers::put_opt_string(&mut out, "units", units.as_deref());
    Ok(Some(out))
}

pub(crate) fn set_length_units(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let units = params::string(input, "units", true)?.unwrap_or_default();
    let convert = params::flag(input, "convert", false, true)?;

    engine.set_length_units(file.as_deref(), &units, convert, session)?;

    Ok(None)
}

pub(crate) fn set_mass_units(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let units = params::string(input, "units", true)?.unwrap_or_default();
    let convert = params::flag(input, "convert", false, true)?;

    engine.set_mass_units(file.as_deref(), &units, convert, session)?;

    Ok(None)
}

pub(crate) fn get_unit_system(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let name = engine.get_unit_system(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    writers::put_opt_string(&mut out, "name", name.as_deref());
    Ok(Some(out))
}

pub(crate) fn set_unit_system(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let name = params::string(input, "name", true)?.unwrap_or_default();
    let convert = params::flag(input, "convert", false, true)?;

    engine.set_unit_system(file.as_deref(), &name, convert, session)?;

    Ok(None)
}

pub(crate) fn create_unit_system(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;
    let name = params::string(input, "name", true)?.unwrap_or_default();
    let unit_length = params::string(input, "unit_length", false)?;
    let unit_mass_force = params::string(input, "unit_mass_force", false)?;
    let unit_time = params::string(input, "unit_time", false)?;
    let unit_temp = params::string(input, "unit_temp", false)?;
    let mass = params::flag(input, "mass", false, true)?;

    engine.create_unit_system(
        file.as_deref(),
        &name,
        mass,
        unit_mass_force.as_deref(),
        unit_length.as_deref(),
        unit_time.as_deref(),
        unit_temp.as_deref(),
        session,
    )?;

    Ok(None)
}
