//! Typed parameter accessors over the untyped input record.
//!
//! Every accessor takes the input record, the parameter name and a
//! required flag, and either yields the coerced value or fails with an
//! error naming the parameter. A JSON `null` counts as absent everywhere.
//! Accessors are pure reads; the first violated constraint aborts the
//! whole request.

use serde_json::Value;

use super::JsonMap;
use super::errors::DispatchError;

/// Reads a raw value, enforcing the required flag.
///
/// # Errors
///
/// Returns [`DispatchError::MissingParameter`] when `required` is set and
/// the key is absent or null.
pub(crate) fn get<'a>(
    input: &'a JsonMap,
    name: &str,
    required: bool,
) -> Result<Option<&'a Value>, DispatchError> {
    match input.get(name) {
        None | Some(Value::Null) => {
            if required {
                Err(DispatchError::missing_parameter(name))
            } else {
                Ok(None)
            }
        }
        Some(value) => Ok(Some(value)),
    }
}

/// Reads a string parameter.
///
/// # Errors
///
/// Fails with `TypeMismatch` when the value is present but not a string.
pub(crate) fn string(
    input: &JsonMap,
    name: &str,
    required: bool,
) -> Result<Option<String>, DispatchError> {
    match get(input, name, required)? {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(DispatchError::type_mismatch(name, "a string")),
    }
}

/// Reads a boolean flag parameter, yielding `default` when absent.
///
/// Native booleans and the strings `"true"`/`"false"` (ASCII
/// case-insensitive) parse identically.
///
/// # Errors
///
/// Fails with `TypeMismatch` for any other shape.
pub(crate) fn flag(
    input: &JsonMap,
    name: &str,
    required: bool,
    default: bool,
) -> Result<bool, DispatchError> {
    match get(input, name, required)? {
        None => Ok(default),
        Some(Value::Bool(value)) => Ok(*value),
        Some(Value::String(text)) => {
            if text.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if text.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(DispatchError::type_mismatch(name, "a boolean"))
            }
        }
        Some(_) => Err(DispatchError::type_mismatch(name, "a boolean")),
    }
}

/// Reads a numeric parameter, accepting numbers and numeric strings.
///
/// # Errors
///
/// Fails with `TypeMismatch` when the value cannot be read as a number.
pub(crate) fn double(
    input: &JsonMap,
    name: &str,
    required: bool,
) -> Result<Option<f64>, DispatchError> {
    match get(input, name, required)? {
        None => Ok(None),
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) => Ok(Some(value)),
            None => Err(DispatchError::type_mismatch(name, "a number")),
        },
        Some(Value::String(text)) => match text.trim().parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(DispatchError::type_mismatch(name, "a number")),
        },
        Some(_) => Err(DispatchError::type_mismatch(name, "a number")),
    }
}

/// Reads a mapping parameter.
///
/// # Errors
///
/// Fails with `TypeMismatch` when the value is present but not a mapping.
pub(crate) fn object<'a>(
    input: &'a JsonMap,
    name: &str,
    required: bool,
) -> Result<Option<&'a JsonMap>, DispatchError> {
    match get(input, name, required)? {
        None => Ok(None),
        Some(Value::Object(record)) => Ok(Some(record)),
        Some(_) => Err(DispatchError::type_mismatch(name, "a record")),
    }
}

/// Reads a sequence parameter.
///
/// # Errors
///
/// Fails with `TypeMismatch` when the value is present but not a sequence.
pub(crate) fn list<'a>(
    input: &'a JsonMap,
    name: &str,
    required: bool,
) -> Result<Option<&'a Vec<Value>>, DispatchError> {
    match get(input, name, required)? {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(DispatchError::type_mismatch(name, "a list")),
    }
}

/// Coerces a value into a list of strings.
///
/// A sequence coerces element-wise (strings stay as-is, numbers and
/// booleans take their display form); a bare string becomes a one-element
/// list.
///
/// # Errors
///
/// Fails with `TypeMismatch` for container elements or non-list shapes.
pub(crate) fn string_list(value: &Value, name: &str) -> Result<Vec<String>, DispatchError> {
    match value {
        Value::String(text) => Ok(vec![text.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => Ok(text.clone()),
                Value::Number(number) => Ok(number.to_string()),
                Value::Bool(flag) => Ok(flag.to_string()),
                _ => Err(DispatchError::type_mismatch(name, "a list of strings")),
            })
            .collect(),
        _ => Err(DispatchError::type_mismatch(name, "a list of strings")),
    }
}

/// Reads a list-of-integers parameter (component id paths).
///
/// # Errors
///
/// Fails with `TypeMismatch` when the value is not a sequence of integers.
pub(crate) fn int_list(
    input: &JsonMap,
    name: &str,
    required: bool,
) -> Result<Option<Vec<i32>>, DispatchError> {
    let Some(items) = list(input, name, required)? else {
        return Ok(None);
    };
    items
        .iter()
        .map(|item| {
            item.as_i64()
                .and_then(|wide| i32::try_from(wide).ok())
                .ok_or_else(|| DispatchError::type_mismatch(name, "a list of integers"))
        })
        .collect::<Result<Vec<i32>, DispatchError>>()
        .map(Some)
}

/// Whether a filename value contains filesystem wildcards.
pub(crate) fn is_pattern(value: Option<&str>) -> bool {
    value.is_some_and(|text| text.contains('*') || text.contains('?'))
}
