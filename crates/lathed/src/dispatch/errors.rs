//! Error types for request validation and dispatch failures.
//!
//! Every variant is terminal for its request: validation failures and
//! engine failures both abort the request and surface a single error to the
//! caller. Messages name the offending parameter or function so the
//! transport layer can produce precise failure responses.

use thiserror::Error;

use crate::engine::EngineError;

/// Errors surfaced by the dispatch and marshaling layer.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required parameter was absent (or null) in the input record.
    #[error("missing required parameter: {name}")]
    MissingParameter { name: String },

    /// A parameter was present but had the wrong shape.
    #[error("parameter {name} must be {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },

    /// A parameter had the right shape but a value outside the allowed set.
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },

    /// The function name did not match any registered handler.
    #[error("unknown function name: {function}")]
    UnknownFunction { function: String },

    /// The request envelope could not be parsed.
    #[error("malformed request: {message}")]
    MalformedRequest {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The engine collaborator failed; forwarded unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl DispatchError {
    /// Creates a missing-parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Creates a type-mismatch error; `expected` describes the accepted
    /// shape (for example "a string").
    pub fn type_mismatch(name: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
        }
    }

    /// Creates an invalid-value error.
    pub fn invalid_value(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown-function error carrying the literal name.
    pub fn unknown_function(function: impl Into<String>) -> Self {
        Self::UnknownFunction {
            function: function.into(),
        }
    }

    /// Creates a malformed-request error from a serde error.
    pub fn from_json_error(source: serde_json::Error) -> Self {
        Self::MalformedRequest {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates a malformed-request error with a custom message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
            source: None,
        }
    }
}
