//! Handlers for assembly operations: component assembly and placement
//! transforms.

use lathe_types::AssembleInstructions;

use crate::engine::CadEngine;

use super::super::errors::DispatchError;
use super::super::{JsonMap, params, readers, writers};

pub(crate) fn assemble(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let dirname = params::string(input, "dirname", false)?;
    // Assembling without an explicit target would act on an unspecified
    // scope, so the name is required up front.
    let file = params::string(input, "model", true)?.unwrap_or_default();
    let generic = params::string(input, "generic", false)?;
    let into_asm = params::string(input, "into_asm", false)?;
    let component_path = params::int_list(input, "path", false)?;
    let transform = params::object(input, "transform", false)?
        .map(readers::transform)
        .transpose()?;
    let constraints = params::get(input, "constraints", false)?
        .map(|value| readers::constraints(value, "constraints"))
        .transpose()?;
    let package_assembly = params::flag(input, "package_assembly", false, false)?;
    let ref_model = params::string(input, "ref_model", false)?;
    let walk_children = params::flag(input, "walk_children", false, false)?;
    let assemble_to_root = params::flag(input, "assemble_to_root", false, false)?;
    let suppress = params::flag(input, "suppress", false, false)?;

    let instructions = AssembleInstructions {
        dirname,
        file,
        generic,
        into_asm,
        component_path,
        transform,
        constraints,
        package_assembly,
        ref_model,
        walk_children,
        assemble_to_root,
        suppress,
    };

    let outcome = engine.assemble(&instructions, session)?;

    let mut out = JsonMap::new();
    if let Some(result) = outcome {
        writers::put_opt_string(&mut out, "dirname", result.dirname.as_deref());
        writers::put_opt_strings(&mut out, "files", result.files);
        writers::put_positive(&mut out, "revision", result.revision);
        writers::put_positive(&mut out, "feature_id", result.feature_id);
    }
    Ok(Some(out))
}

pub(crate) fn get_transform(
    engine: &dyn CadEngine,
    session: Option<&str>,
    input: &JsonMap,
) -> Result<Option<JsonMap>, DispatchError> {
    let asm = params::string(input, "asm", false)?;
    let path = params::int_list(input, "path", false)?;
    let csys = params::string(input, "csys", false)?;

    let transform = engine.get_transform(asm.as_deref(), path.as_deref(), csys.as_deref(), session)?;

    // An absent transform still yields an (empty) output record.
    let out = transform
        .map(|value| writers::transform(&value))
        .unwrap_or_default();
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use lathe_types::{AssembleOutcome, DatumSide, Point3, Transform};

    use super::super::test_support::{MockEngine, record};
    use super::*;

    #[test]
    fn assemble_requires_model_before_the_engine_runs() {
        let engine = MockEngine::new();
        let error = assemble(&engine, None, &record(json!({ "into_asm": "TOP.ASM" })))
            .expect_err("should fail");
        assert!(matches!(
            error,
            DispatchError::MissingParameter { ref name } if name == "model"
        ));
    }

    #[test]
    fn assemble_builds_full_instructions() {
        let mut engine = MockEngine::new();
        engine
            .expect_assemble()
            .withf(|instructions: &AssembleInstructions, _session| {
                instructions.file == "BOLT.PRT"
                    && instructions.into_asm.as_deref() == Some("TOP.ASM")
                    && instructions.component_path.as_deref() == Some(&[3, 17][..])
                    && instructions
                        .constraints
                        .as_ref()
                        .is_some_and(|constraints| {
                            constraints.len() == 1
                                && constraints[0].kind == "csys"
                                && constraints[0].asm_datum == DatumSide::Red
                        })
            })
            .once()
            .returning(|_, _| {
                Ok(Some(AssembleOutcome {
                    dirname: None,
                    files: Some(vec!["BOLT.PRT".to_owned()]),
                    revision: 0,
                    feature_id: 40,
                }))
            });

        let out = assemble(
            &engine,
            None,
            &record(json!({
                "model": "BOLT.PRT",
                "into_asm": "TOP.ASM",
                "path": [3, 17],
                "constraints": { "type": "csys", "asmdatum": "red" },
            })),
        )
        .expect("should dispatch")
        .expect("assemble returns a record");

        // Non-positive revision is omitted; feature id is kept.
        assert_eq!(
            Value::Object(out),
            json!({ "files": ["BOLT.PRT"], "feature_id": 40 })
        );
    }

    #[test]
    fn assemble_rejects_malformed_constraints() {
        let engine = MockEngine::new();
        let error = assemble(
            &engine,
            None,
            &record(json!({ "model": "BOLT.PRT", "constraints": "mate" })),
        )
        .expect_err("should fail");
        assert!(matches!(error, DispatchError::InvalidValue { .. }));
    }

    #[test]
    fn get_transform_writes_the_transform_record() {
        let mut engine = MockEngine::new();
        engine.expect_get_transform().once().returning(|_, _, _, _| {
            Ok(Some(Transform {
                origin: Point3::new(1.0, 2.0, 3.0),
                ..Transform::identity()
            }))
        });

        let out = get_transform(&engine, None, &record(json!({ "asm": "TOP.ASM" })))
            .expect("should dispatch")
            .expect("returns a record");
        assert_eq!(
            out.get("origin"),
            Some(&json!({ "x": 1.0, "y": 2.0, "z": 3.0 }))
        );
        assert_eq!(out.get("scale"), Some(&json!(1.0)));
    }

    #[test]
    fn get_transform_yields_empty_record_when_engine_has_none() {
        let mut engine = MockEngine::new();
        engine
            .expect_get_transform()
            .once()
            .returning(|_, _, _, _| Ok(None));

        let out = get_transform(&engine, None, &record(json!({})))
            .expect("should dispatch")
            .expect("returns a record");
        assert!(out.is_empty());
    }
}
