//! Request dispatch and marshaling for CAD-file operations.
//!
//! A transport layer (out of scope here) decodes each request into a
//! [`RequestEnvelope`] carrying a session id, a function name and an
//! untyped input record. The [`Dispatcher`] selects the handler by exact
//! name match, the handler coerces parameters into typed arguments, makes
//! one call on the [`crate::engine::CadEngine`] collaborator, and writes
//! the typed result back into an untyped output record.
//!
//! ## Envelope
//!
//! ```json
//! {"sessionId":"a41f","function":"exists","input":{"model":"BOX.PRT"}}
//! ```
//!
//! A present output record (possibly empty) means success with data; no
//! output record means void success. An absent function name short-circuits
//! to a no-op so the transport can probe the daemon cheaply.
//!
//! ## Failure model
//!
//! The first violated constraint aborts the whole request: there is no
//! partial validation and no partial success. Engine failures pass through
//! unchanged; see [`DispatchError`].

mod errors;
mod handlers;
mod params;
mod readers;
mod request;
mod router;
mod writers;

pub use self::errors::DispatchError;
pub use self::readers::OneOrMany;
pub use self::request::RequestEnvelope;
pub use self::router::{Dispatcher, FunctionRouter};

/// The untyped input/output record: a mapping from parameter name to value.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
