//! Request envelope deserialization.
//!
//! The envelope format matches what the transport layer decodes from the
//! wire: a session id, a function name and an untyped input record, all
//! optional. Absent pieces have defined meanings rather than being errors:
//! no function is a no-op probe, no input is an empty record.

use serde::Deserialize;

use super::JsonMap;
use super::errors::DispatchError;

/// A single parsed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEnvelope {
    /// Opaque token scoping the request to one engine context.
    #[serde(rename = "sessionId", default)]
    session_id: Option<String>,
    /// Function name selecting the operation handler.
    #[serde(default)]
    function: Option<String>,
    /// Untyped named parameters for the operation.
    #[serde(default)]
    input: Option<JsonMap>,
}

impl RequestEnvelope {
    /// Builds an envelope directly, for embedding callers and tests.
    #[must_use]
    pub fn new(
        session_id: Option<String>,
        function: Option<String>,
        input: Option<JsonMap>,
    ) -> Self {
        Self {
            session_id,
            function,
            input,
        }
    }

    /// Parses one request line into an envelope.
    ///
    /// Trailing whitespace (including the newline delimiter) is trimmed
    /// before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MalformedRequest`] when the line is empty
    /// or is not valid JSON matching the envelope schema.
    pub fn parse(line: &[u8]) -> Result<Self, DispatchError> {
        let trimmed = trim_trailing_whitespace(line);
        if trimmed.is_empty() {
            return Err(DispatchError::malformed("empty request line"));
        }

        serde_json::from_slice(trimmed).map_err(DispatchError::from_json_error)
    }

    /// The session id, when one was supplied.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// The function name, when one was supplied.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// The input record, when one was supplied.
    #[must_use]
    pub fn input(&self) -> Option<&JsonMap> {
        self.input.as_ref()
    }
}

/// Trims trailing ASCII whitespace from a byte slice.
fn trim_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map(|pos| pos + 1)
        .unwrap_or(0);
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_envelope() {
        let input = br#"{"sessionId":"a41f","function":"exists","input":{"model":"BOX.PRT"}}"#;
        let request = RequestEnvelope::parse(input).expect("parse full envelope");
        assert_eq!(request.session_id(), Some("a41f"));
        assert_eq!(request.function(), Some("exists"));
        let record = request.input().expect("input record");
        assert_eq!(
            record.get("model").and_then(|value| value.as_str()),
            Some("BOX.PRT")
        );
    }

    #[test]
    fn function_and_input_are_optional() {
        let request = RequestEnvelope::parse(br#"{"sessionId":"a41f"}"#).expect("parse probe");
        assert_eq!(request.session_id(), Some("a41f"));
        assert!(request.function().is_none());
        assert!(request.input().is_none());
    }

    #[test]
    fn trims_trailing_whitespace() {
        let request = RequestEnvelope::parse(b"{\"function\":\"list\"}  \n").expect("parse");
        assert_eq!(request.function(), Some("list"));
    }

    #[test]
    fn rejects_empty_line() {
        let result = RequestEnvelope::parse(b"");
        assert!(matches!(
            result,
            Err(DispatchError::MalformedRequest { .. })
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        let result = RequestEnvelope::parse(b"not json");
        assert!(matches!(
            result,
            Err(DispatchError::MalformedRequest { .. })
        ));
    }
}
