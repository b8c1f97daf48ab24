//! Handlers for analysis operations: mass properties and model accuracy.

use serde_json::Value;

use crate::engine::CadEngine;

use super::super::errors::DispatchError;
use super::super::{JsonMap, params, writers};

pub(crate) fn massprops(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let props = engine.massprops(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    if let Some(result) = props {
        out.insert("volume".to_owned(), Value::from(result.volume));
        out.insert("mass".to_owned(), Value::from(result.mass));
        out.insert("density".to_owned(), Value::from(result.density));
        out.insert("surface_area".to_owned(), Value::from(result.surface_area));

        if let Some(tensor) = result.ctr_grav_inertia_tensor {
            out.insert(
                "ctr_grav_inertia_tensor".to_owned(),
                Value::Object(writers::inertia(&tensor)),
            );
        }
        if let Some(inertia) = result.coord_sys_inertia {
            out.insert(
                "coord_sys_inertia".to_owned(),
                Value::Object(writers::inertia(&inertia)),
            );
        }
        if let Some(tensor) = result.coord_sys_inertia_tensor {
            out.insert(
                "coord_sys_inertia_tensor".to_owned(),
                Value::Object(writers::inertia(&tensor)),
            );
        }
        if let Some(centre) = result.centre_gravity {
            out.insert("ctr_grav".to_owned(), Value::Object(writers::point(&centre)));
        }
    }
    Ok(Some(out))
}

pub(crate) fn get_accuracy(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let file = params::string(input, "model", false)?;

    let accuracy = engine.get_accuracy(file.as_deref(), session)?;

    let mut out = JsonMap::new();
    if let Some(result) = accuracy {
        // String form on purpose: avoids float formatting drift across
        // transports.
        out.insert(
            "accuracy".to_owned(),
            Value::from(result.value.to_string()),
        );
        out.insert(
            "relative".to_owned(),
            Value::from(result.relative.to_string()),
        );
    }
    Ok(Some(out))
}
