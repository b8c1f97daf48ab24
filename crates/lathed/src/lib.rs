//! Session-oriented command dispatch for CAD-file operations.
//!
//! The lathe daemon exposes a large set of CAD-file operations (open, save,
//! assemble, units, mass properties, materials, relations, transforms)
//! through one generic request/response envelope keyed by a function-name
//! string. This crate implements the dispatch-and-marshaling engine: it
//! validates and coerces an untyped input record into strongly-typed
//! operation arguments, invokes the corresponding capability on the CAD
//! engine collaborator, and serialises the typed result back into an
//! untyped output record.
//!
//! The CAD engine itself, session lifecycle, and transport framing are
//! external collaborators reached only through the [`engine::CadEngine`]
//! contract and the [`dispatch::RequestEnvelope`] shape.

pub mod dispatch;
pub mod engine;
pub mod telemetry;
