//! Structured-value readers: nested untyped records into typed domain
//! objects.
//!
//! Readers are total over the untyped value variants: every shape either
//! coerces or fails with an error naming the offending key. The transform
//! reader is symmetric with its writer in `writers` so a write-then-read
//! round trip is the identity.

use serde_json::Value;

use lathe_types::{Constraint, DatumSide, Point3, Transform};

use super::JsonMap;
use super::errors::DispatchError;
use super::params;

pub(crate) const KEY_ORIGIN: &str = "origin";
pub(crate) const KEY_XAXIS: &str = "xaxis";
pub(crate) const KEY_YAXIS: &str = "yaxis";
pub(crate) const KEY_ZAXIS: &str = "zaxis";
pub(crate) const KEY_SCALE: &str = "scale";

const DATUM_SIDE_RED: &str = "RED";
const DATUM_SIDE_YELLOW: &str = "YELLOW";

/// A polymorphic parameter that is either one record or a sequence of
/// records, resolved once at the boundary so handler logic never re-checks
/// the shape.
#[derive(Debug)]
pub enum OneOrMany<'a> {
    /// A single record.
    Single(&'a JsonMap),
    /// A sequence whose elements must each be a record.
    Many(&'a [Value]),
}

impl<'a> OneOrMany<'a> {
    /// Classifies an untyped value as one record or many.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidValue` for any shape other than a mapping or a
    /// sequence.
    pub fn classify(value: &'a Value, name: &str) -> Result<Self, DispatchError> {
        match value {
            Value::Object(record) => Ok(Self::Single(record)),
            Value::Array(items) => Ok(Self::Many(items)),
            other => Err(DispatchError::invalid_value(
                name,
                format!("expected a record or a list of records, got: {other}"),
            )),
        }
    }
}

/// Reads a point record with keys `x`/`y`/`z`, each defaulting to zero.
pub(crate) fn point(record: &JsonMap) -> Result<Point3, DispatchError> {
    Ok(Point3 {
        x: params::double(record, "x", false)?.unwrap_or(0.0),
        y: params::double(record, "y", false)?.unwrap_or(0.0),
        z: params::double(record, "z", false)?.unwrap_or(0.0),
    })
}

fn point_field(record: &JsonMap, name: &str) -> Result<Option<Point3>, DispatchError> {
    params::object(record, name, false)?.map(point).transpose()
}

/// Reads a transform record.
///
/// Missing rows fall back to the identity transform row by row; a missing
/// scale means unit scale. The accepted key set matches
/// [`super::writers::transform`] exactly.
pub(crate) fn transform(record: &JsonMap) -> Result<Transform, DispatchError> {
    let identity = Transform::identity();
    Ok(Transform {
        origin: point_field(record, KEY_ORIGIN)?.unwrap_or(identity.origin),
        x_axis: point_field(record, KEY_XAXIS)?.unwrap_or(identity.x_axis),
        y_axis: point_field(record, KEY_YAXIS)?.unwrap_or(identity.y_axis),
        z_axis: point_field(record, KEY_ZAXIS)?.unwrap_or(identity.z_axis),
        scale: params::double(record, KEY_SCALE, false)?.unwrap_or(1.0),
    })
}

fn datum_side(record: &JsonMap, name: &str) -> Result<DatumSide, DispatchError> {
    let Some(token) = params::string(record, name, false)? else {
        return Ok(DatumSide::None);
    };
    if token.eq_ignore_ascii_case(DATUM_SIDE_RED) {
        Ok(DatumSide::Red)
    } else if token.eq_ignore_ascii_case(DATUM_SIDE_YELLOW) {
        Ok(DatumSide::Yellow)
    } else {
        Err(DispatchError::invalid_value(name, token))
    }
}

/// Reads a single constraint record.
///
/// The `type` key is required; datum side tokens are restricted to
/// `RED`/`YELLOW` (case-insensitive) and default to none when absent.
pub(crate) fn constraint(record: &JsonMap) -> Result<Constraint, DispatchError> {
    let kind = params::string(record, "type", true)?.unwrap_or_default();
    Ok(Constraint {
        kind,
        asm_ref: params::string(record, "asmref", false)?,
        comp_ref: params::string(record, "compref", false)?,
        asm_datum: datum_side(record, "asmdatum")?,
        comp_datum: datum_side(record, "compdatum")?,
        offset: params::double(record, "offset", false)?,
    })
}

/// Reads the polymorphic `constraints` parameter: one record yields one
/// constraint, a sequence yields one constraint per element.
///
/// # Errors
///
/// Fails with `InvalidValue` for non-record, non-sequence shapes and for
/// sequence elements that are not records.
pub(crate) fn constraints(value: &Value, name: &str) -> Result<Vec<Constraint>, DispatchError> {
    match OneOrMany::classify(value, name)? {
        OneOrMany::Single(record) => Ok(vec![constraint(record)?]),
        OneOrMany::Many(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(record) => constraint(record),
                other => Err(DispatchError::invalid_value(
                    name,
                    format!("constraint entries must be records, got: {other}"),
                )),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object literal, got: {other}"),
        }
    }

    #[test]
    fn constraint_requires_type() {
        let error = constraint(&record(json!({ "asmref": "A_1" }))).expect_err("should fail");
        assert!(matches!(
            error,
            DispatchError::MissingParameter { ref name } if name == "type"
        ));
    }

    #[rstest]
    #[case("RED", DatumSide::Red)]
    #[case("red", DatumSide::Red)]
    #[case("Yellow", DatumSide::Yellow)]
    #[case("YELLOW", DatumSide::Yellow)]
    fn datum_tokens_parse_case_insensitively(#[case] token: &str, #[case] expected: DatumSide) {
        let parsed = constraint(&record(json!({ "type": "csys", "asmdatum": token })))
            .expect("should parse");
        assert_eq!(parsed.asm_datum, expected);
        assert_eq!(parsed.comp_datum, DatumSide::None);
    }

    #[test]
    fn absent_datum_defaults_to_none() {
        let parsed = constraint(&record(json!({ "type": "csys" }))).expect("should parse");
        assert_eq!(parsed.asm_datum, DatumSide::None);
        assert_eq!(parsed.comp_datum, DatumSide::None);
    }

    #[test]
    fn bad_datum_token_is_invalid_value() {
        let error = constraint(&record(json!({ "type": "csys", "compdatum": "GREEN" })))
            .expect_err("should fail");
        assert!(matches!(
            error,
            DispatchError::InvalidValue { ref name, .. } if name == "compdatum"
        ));
    }

    #[test]
    fn single_record_and_one_element_list_are_equivalent() {
        let single = json!({ "type": "mate", "offset": 2.5 });
        let as_list = json!([{ "type": "mate", "offset": 2.5 }]);

        let from_single = constraints(&single, "constraints").expect("single");
        let from_list = constraints(&as_list, "constraints").expect("list");

        assert_eq!(from_single, from_list);
        assert_eq!(from_single.len(), 1);
    }

    #[rstest]
    #[case(json!("mate"))]
    #[case(json!(42))]
    #[case(json!(true))]
    fn non_record_constraint_shapes_are_invalid(#[case] value: Value) {
        let error = constraints(&value, "constraints").expect_err("should fail");
        assert!(matches!(error, DispatchError::InvalidValue { .. }));
    }

    #[test]
    fn list_element_must_be_record() {
        let error =
            constraints(&json!([{ "type": "mate" }, "bogus"]), "constraints").expect_err("fail");
        assert!(matches!(error, DispatchError::InvalidValue { .. }));
    }

    #[test]
    fn transform_defaults_to_identity() {
        let parsed = transform(&record(json!({}))).expect("should parse");
        assert_eq!(parsed, Transform::identity());
    }

    #[test]
    fn transform_reads_rows_and_scale() {
        let parsed = transform(&record(json!({
            "origin": { "x": 1.0, "y": 2.0, "z": 3.0 },
            "xaxis": { "x": 0.0, "y": 1.0, "z": 0.0 },
            "scale": 2.0,
        })))
        .expect("should parse");
        assert_eq!(parsed.origin, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(parsed.x_axis, Point3::new(0.0, 1.0, 0.0));
        // Unspecified rows keep their identity values.
        assert_eq!(parsed.y_axis, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(parsed.scale, 2.0);
    }
}
