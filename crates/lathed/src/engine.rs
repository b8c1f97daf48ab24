//! Contract with the external CAD engine collaborator.
//!
//! The dispatch layer never performs geometry or file work itself; every
//! operation handler makes exactly one call on [`CadEngine`] and forwards
//! any failure unchanged. Implementations own session lifecycle and decide
//! their own concurrency policy; the dispatch layer holds no state between
//! calls and adds no locking, retry, or caching of its own.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use lathe_types::{
    Accuracy, AssembleInstructions, AssembleOutcome, FileInfo, InstanceList, Massprops,
    MaterialEntry, OpenInstructions, OpenOutcome, Transform,
};

/// Tracing target for engine-call instrumentation.
pub(crate) const ENGINE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::engine");

/// Failures reported by the engine collaborator.
///
/// These pass through the dispatch layer untouched; handlers never catch or
/// rewrite them.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No usable engine session for the given session id.
    #[error("no active session: {0}")]
    Session(String),
    /// The underlying CAD toolkit reported a coded failure.
    #[error("toolkit error {code}: {message}")]
    Toolkit { code: i32, message: String },
    /// A named file was not found in session or on disk.
    #[error("file not found: {0}")]
    NotFound(String),
    /// The operation is not supported for the target model type.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    /// Any other engine-side failure.
    #[error("{0}")]
    Other(String),
}

/// Synchronous capabilities of the CAD engine collaborator.
///
/// Every method takes typed arguments plus the opaque session id scoping
/// the call to one engine context. A `file` of `None` targets the engine's
/// current (active) file; `files` batches take precedence over `file` where
/// both are meaningful. Methods returning `Option` yield `None` when the
/// engine has no data for the request, which the handlers translate into an
/// empty output record.
pub trait CadEngine: Send + Sync {
    /// Opens one or more files, optionally displaying and activating them.
    fn open(
        &self,
        instructions: &OpenInstructions,
        session: Option<&str>,
    ) -> Result<Option<OpenOutcome>, EngineError>;

    /// Reports whether the last open for `file` left errors behind.
    fn open_errors(&self, file: Option<&str>, session: Option<&str>)
    -> Result<bool, EngineError>;

    /// Renames a model, on disk unless `only_session` is set.
    fn rename(
        &self,
        file: Option<&str>,
        new_name: &str,
        only_session: bool,
        session: Option<&str>,
    ) -> Result<Option<String>, EngineError>;

    /// Saves the named file or batch, or the active file when both are absent.
    fn save(
        &self,
        file: Option<&str>,
        files: Option<&[String]>,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Backs up a model to `target_dir`.
    fn backup(&self, file: &str, target_dir: &str, session: Option<&str>)
    -> Result<(), EngineError>;

    /// Erases models from session, optionally with their children.
    fn erase(
        &self,
        file: Option<&str>,
        files: Option<&[String]>,
        erase_children: bool,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Erases every model not currently displayed.
    fn erase_not_displayed(&self, session: Option<&str>) -> Result<(), EngineError>;

    /// Regenerates models, optionally displaying them afterwards.
    fn regenerate(
        &self,
        file: Option<&str>,
        files: Option<&[String]>,
        display: bool,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Refreshes the window for a model without regenerating.
    fn refresh(&self, file: Option<&str>, session: Option<&str>) -> Result<(), EngineError>;

    /// Repaints the window for a model.
    fn repaint(&self, file: Option<&str>, session: Option<&str>) -> Result<(), EngineError>;

    /// Displays a model, optionally activating its window.
    fn display(&self, file: &str, activate: bool, session: Option<&str>)
    -> Result<(), EngineError>;

    /// Closes the window for a model.
    fn close_window(&self, file: Option<&str>, session: Option<&str>) -> Result<(), EngineError>;

    /// The currently active model, when there is one.
    fn get_active(&self, session: Option<&str>) -> Result<Option<OpenOutcome>, EngineError>;

    /// Whether `file` is the currently active model.
    fn is_active(&self, file: &str, session: Option<&str>) -> Result<bool, EngineError>;

    /// Lists session models matching the name or batch (wildcards allowed).
    fn list(
        &self,
        file: Option<&str>,
        files: Option<&[String]>,
        session: Option<&str>,
    ) -> Result<Option<Vec<String>>, EngineError>;

    /// Whether `file` exists in session or on disk.
    fn exists(&self, file: &str, session: Option<&str>) -> Result<bool, EngineError>;

    /// Directory, name and revision metadata for a model.
    fn get_fileinfo(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<FileInfo>, EngineError>;

    /// Relation lines for a model.
    fn get_relations(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<Vec<String>>, EngineError>;

    /// Replaces the relation lines for a model; `None` clears them.
    fn set_relations(
        &self,
        file: Option<&str>,
        relations: Option<&[String]>,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Post-regenerate relation lines for a model.
    fn get_postregen_relations(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<Vec<String>>, EngineError>;

    /// Replaces the post-regenerate relation lines; `None` clears them.
    fn set_postregen_relations(
        &self,
        file: Option<&str>,
        relations: Option<&[String]>,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Whether a model owns a family table with instances.
    fn has_instances(&self, file: Option<&str>, session: Option<&str>)
    -> Result<bool, EngineError>;

    /// Family-table instances of a generic model.
    fn list_instances(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<InstanceList>, EngineError>;

    /// Mass-property analysis for a model.
    fn massprops(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<Massprops>, EngineError>;

    /// The length units of a model.
    fn get_length_units(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<String>, EngineError>;

    /// The mass units of a model.
    fn get_mass_units(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<String>, EngineError>;

    /// Sets the length units, converting existing values when asked.
    fn set_length_units(
        &self,
        file: Option<&str>,
        units: &str,
        convert: bool,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Sets the mass units, converting existing values when asked.
    fn set_mass_units(
        &self,
        file: Option<&str>,
        units: &str,
        convert: bool,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// The name of the unit system a model uses.
    fn get_unit_system(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<String>, EngineError>;

    /// Switches a model to a named unit system.
    fn set_unit_system(
        &self,
        file: Option<&str>,
        name: &str,
        convert: bool,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Creates a custom unit system on a model.
    #[expect(clippy::too_many_arguments, reason = "mirrors the engine capability signature")]
    fn create_unit_system(
        &self,
        file: Option<&str>,
        name: &str,
        mass: bool,
        unit_mass_force: Option<&str>,
        unit_length: Option<&str>,
        unit_time: Option<&str>,
        unit_temp: Option<&str>,
        session: Option<&str>,
    ) -> Result<(), EngineError>;

    /// Assembles a component into an assembly per the instructions.
    fn assemble(
        &self,
        instructions: &AssembleInstructions,
        session: Option<&str>,
    ) -> Result<Option<AssembleOutcome>, EngineError>;

    /// The placement transform of an assembly component.
    fn get_transform(
        &self,
        asm: Option<&str>,
        path: Option<&[i32]>,
        csys: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<Transform>, EngineError>;

    /// Simplified representations of a model (wildcards allowed in `rep`).
    fn list_simp_reps(
        &self,
        file: Option<&str>,
        rep: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<Vec<String>>, EngineError>;

    /// Current material assignments, optionally including files without a match.
    fn get_current_material(
        &self,
        file: Option<&str>,
        include_non_matching: bool,
        session: Option<&str>,
    ) -> Result<Option<Vec<MaterialEntry>>, EngineError>;

    /// Sets the current material and reports the affected files.
    fn set_current_material(
        &self,
        file: Option<&str>,
        material: &str,
        session: Option<&str>,
    ) -> Result<Option<Vec<String>>, EngineError>;

    /// Materials on file for a model, filtered by name pattern.
    fn list_materials(
        &self,
        file: Option<&str>,
        material: Option<&str>,
        include_non_matching: bool,
        session: Option<&str>,
    ) -> Result<Option<Vec<MaterialEntry>>, EngineError>;

    /// Loads a material file into models and reports the affected files.
    fn load_material_file(
        &self,
        file: Option<&str>,
        dirname: Option<&str>,
        material: &str,
        session: Option<&str>,
    ) -> Result<Option<Vec<String>>, EngineError>;

    /// Deletes a material from models and reports the affected files.
    fn delete_material(
        &self,
        file: Option<&str>,
        material: &str,
        session: Option<&str>,
    ) -> Result<Option<Vec<String>>, EngineError>;

    /// The accuracy setting of a model.
    fn get_accuracy(
        &self,
        file: Option<&str>,
        session: Option<&str>,
    ) -> Result<Option<Accuracy>, EngineError>;
}

/// Instrumentation hook invoked around each dispatched engine call.
///
/// Each handler makes exactly one collaborator call, so the dispatcher
/// wraps the whole handler invocation; marshaling cost is negligible next
/// to the engine round trip. Both methods default to no-ops so observers
/// can implement only what they need.
pub trait CallObserver: Send + Sync {
    /// Invoked before the handler runs.
    fn call_started(&self, function: &str) {
        let _ = function;
    }

    /// Invoked after the handler returns, whether it succeeded or failed.
    fn call_completed(&self, function: &str, elapsed: Duration) {
        let _ = (function, elapsed);
    }
}

/// Observer that records call timings as debug-level tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn call_started(&self, function: &str) {
        debug!(target: ENGINE_TARGET, function, "engine call started");
    }

    fn call_completed(&self, function: &str, elapsed: Duration) {
        debug!(
            target: ENGINE_TARGET,
            function,
            elapsed_us = elapsed.as_micros() as u64,
            "engine call completed"
        );
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl CallObserver for NullObserver {}
