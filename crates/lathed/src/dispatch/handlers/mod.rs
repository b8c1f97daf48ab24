//! Operation handlers, grouped by capability area.
//!
//! Each handler is a pure translation step: read and validate parameters,
//! make exactly one call on the engine collaborator, write the result into
//! an untyped output record. Handlers never call each other, never retry,
//! and re-signal any engine failure untouched. A return of `Ok(None)`
//! means void success (no output record).

pub(crate) mod analysis;
pub(crate) mod assembly;
pub(crate) mod file;
pub(crate) mod material;
pub(crate) mod relation;
pub(crate) mod units;

#[cfg(test)]
pub(crate) mod test_support;

use super::JsonMap;
use super::errors::DispatchError;
use super::params;

/// Reads the `model`/`models` single-or-batch filename pair shared by the
/// multi-file operations.
pub(crate) fn model_pair(
    input: &JsonMap,
) -> Result<(Option<String>, Option<Vec<String>>), DispatchError> {
    let file = params::string(input, "model", false)?;
    let files = params::get(input, "models", false)?
        .map(|value| params::string_list(value, "models"))
        .transpose()?;
    Ok((file, files))
}
