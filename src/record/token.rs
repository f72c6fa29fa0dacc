use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::{capture_field, FieldValue};
use crate::codec::CodecError;

/// Why an identifier value has no usable token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("{kind} values have no canonical token")]
    Unsupported { kind: &'static str },

    #[error("token {token:?} is not a single path segment: {reason}")]
    Invalid { token: String, reason: &'static str },

    #[error("failed to capture identifier value")]
    Capture(#[source] CodecError),
}

/// Canonical text rendering of an identifier, used verbatim as a file name.
///
/// Strings render as-is, integers in base 10, booleans as `true`/`false`.
/// `42_u8`, `42_i64` and `"42"` all render to the same token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdToken(String);

impl IdToken {
    /// Renders any serializable identifier value.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, TokenError> {
        let captured = capture_field(value).map_err(TokenError::Capture)?;
        Self::from_field(&captured)
    }

    /// Renders a value captured from a record field.
    pub fn from_field(value: &FieldValue) -> Result<Self, TokenError> {
        let token = match value.as_json() {
            Value::String(s) => s.clone(),
            Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            Value::Number(_) => return Err(TokenError::Unsupported { kind: "floating-point" }),
            Value::Bool(b) => b.to_string(),
            Value::Null => return Err(TokenError::Unsupported { kind: "null" }),
            Value::Array(_) => return Err(TokenError::Unsupported { kind: "sequence" }),
            Value::Object(_) => return Err(TokenError::Unsupported { kind: "map" }),
        };
        validate(&token)?;
        Ok(IdToken(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate(token: &str) -> Result<(), TokenError> {
    let reason = if token.is_empty() {
        "empty"
    } else if token == "." || token == ".." {
        "relative path component"
    } else if token.contains(['/', '\\']) {
        "contains a path separator"
    } else if token.contains('\0') {
        "contains a NUL byte"
    } else {
        return Ok(());
    };
    Err(TokenError::Invalid {
        token: token.to_string(),
        reason,
    })
}
