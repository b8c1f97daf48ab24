//! Function-name routing for operation dispatch.
//!
//! Dispatch is a single exact-match lookup in a table built once at
//! construction; there is no partial matching and no case folding. Unknown
//! names are rejected with a structured error carrying the literal name
//! before any handler runs.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::engine::{CadEngine, CallObserver, TracingObserver};

use super::JsonMap;
use super::errors::DispatchError;
use super::handlers;
use super::request::RequestEnvelope;

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// An operation handler: engine, session id, input record in; optional
/// output record out.
type Handler =
    fn(&dyn CadEngine, Option<&str>, &JsonMap) -> Result<Option<JsonMap>, DispatchError>;

/// Exact-match table from function name to operation handler.
pub struct FunctionRouter {
    handlers: HashMap<&'static str, Handler>,
}

impl Default for FunctionRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRouter {
    /// Builds the routing table for the full operation surface.
    #[must_use]
    pub fn new() -> Self {
        let mut table: HashMap<&'static str, Handler> = HashMap::new();

        table.insert("open", handlers::file::open as Handler);
        table.insert("open_errors", handlers::file::open_errors);
        table.insert("rename", handlers::file::rename);
        table.insert("save", handlers::file::save);
        table.insert("backup", handlers::file::backup);
        table.insert("erase", handlers::file::erase);
        table.insert("erase_not_displayed", handlers::file::erase_not_displayed);
        table.insert("regenerate", handlers::file::regenerate);
        table.insert("refresh", handlers::file::refresh);
        table.insert("repaint", handlers::file::repaint);
        table.insert("display", handlers::file::display);
        table.insert("close_window", handlers::file::close_window);
        table.insert("get_active", handlers::file::get_active);
        table.insert("is_active", handlers::file::is_active);
        table.insert("list", handlers::file::list);
        table.insert("exists", handlers::file::exists);
        table.insert("get_fileinfo", handlers::file::get_fileinfo);
        table.insert("has_instances", handlers::file::has_instances);
        table.insert("list_instances", handlers::file::list_instances);
        table.insert("list_simp_reps", handlers::file::list_simp_reps);

        table.insert("relations_get", handlers::relation::relations_get);
        table.insert("relations_set", handlers::relation::relations_set);
        table.insert(
            "postregen_relations_get",
            handlers::relation::postregen_relations_get,
        );
        table.insert(
            "postregen_relations_set",
            handlers::relation::postregen_relations_set,
        );

        table.insert("get_length_units", handlers::units::get_length_units);
        table.insert("get_mass_units", handlers::units::get_mass_units);
        table.insert("set_length_units", handlers::units::set_length_units);
        table.insert("set_mass_units", handlers::units::set_mass_units);
        table.insert("get_unit_system", handlers::units::get_unit_system);
        table.insert("set_unit_system", handlers::units::set_unit_system);
        table.insert("create_unit_system", handlers::units::create_unit_system);

        table.insert("get_cur_matl", handlers::material::get_cur_matl);
        table.insert(
            "get_cur_matl_wildcard",
            handlers::material::get_cur_matl_wildcard,
        );
        table.insert("set_cur_matl", handlers::material::set_cur_matl);
        table.insert("list_materials", handlers::material::list_materials);
        table.insert(
            "list_materials_wildcard",
            handlers::material::list_materials_wildcard,
        );
        table.insert("load_matl_file", handlers::material::load_matl_file);
        table.insert("delete_material", handlers::material::delete_material);

        table.insert("assemble", handlers::assembly::assemble);
        table.insert("get_transform", handlers::assembly::get_transform);

        table.insert("massprops", handlers::analysis::massprops);
        table.insert("get_accuracy", handlers::analysis::get_accuracy);

        Self { handlers: table }
    }

    /// The registered function names, for documentation and probing.
    pub fn functions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Routes one function call to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownFunction`] when the name matches no
    /// registered handler; otherwise whatever the handler returns.
    pub fn route(
        &self,
        function: &str,
        engine: &dyn CadEngine,
        session: Option<&str>,
        input: &JsonMap,
    ) -> Result<Option<JsonMap>, DispatchError> {
        let handler = self
            .handlers
            .get(function)
            .ok_or_else(|| DispatchError::unknown_function(function))?;
        handler(engine, session, input)
    }
}

/// Front door of the dispatch layer.
///
/// The dispatcher is stateless and reentrant: each request is fully
/// described by its envelope, and nothing is retained between calls. It
/// does not lock, queue, or reorder concurrent calls for a session; the
/// engine collaborator owns that policy.
pub struct Dispatcher {
    engine: Arc<dyn CadEngine>,
    observer: Arc<dyn CallObserver>,
    router: FunctionRouter,
}

impl Dispatcher {
    /// Creates a dispatcher with tracing-backed call observation.
    #[must_use]
    pub fn new(engine: Arc<dyn CadEngine>) -> Self {
        Self::with_observer(engine, Arc::new(TracingObserver))
    }

    /// Creates a dispatcher with a caller-supplied observer.
    #[must_use]
    pub fn with_observer(engine: Arc<dyn CadEngine>, observer: Arc<dyn CallObserver>) -> Self {
        Self {
            engine,
            observer,
            router: FunctionRouter::new(),
        }
    }

    /// Dispatches one request envelope.
    ///
    /// `Ok(Some(record))` is success with data (possibly an empty record),
    /// `Ok(None)` is void success. An envelope without a function name is a
    /// no-op probe and returns `Ok(None)` without touching the engine.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, an unknown-function error, or
    /// the engine failure forwarded unchanged.
    pub fn dispatch(&self, request: &RequestEnvelope) -> Result<Option<JsonMap>, DispatchError> {
        let Some(function) = request.function() else {
            debug!(target: DISPATCH_TARGET, "request without function, treating as no-op");
            return Ok(None);
        };

        let empty = JsonMap::new();
        let input = request.input().unwrap_or(&empty);

        debug!(
            target: DISPATCH_TARGET,
            function,
            session = request.session_id(),
            "dispatching request"
        );

        self.observer.call_started(function);
        let started = Instant::now();
        let result = self
            .router
            .route(function, self.engine.as_ref(), request.session_id(), input);
        self.observer.call_completed(function, started.elapsed());

        if let Err(error) = &result {
            warn!(target: DISPATCH_TARGET, %error, function, "dispatch failed");
        }
        result
    }
}
