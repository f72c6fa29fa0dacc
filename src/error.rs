use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecError;
use crate::record::{RecordKind, TokenError};

/// Errors surfaced by the store. Nothing is retried or swallowed internally.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `put` was handed something that is not a struct with named fields.
    #[error("invalid value kind: {type_name} is {kind}, expected a struct with named fields")]
    InvalidValueKind {
        type_name: String,
        kind: RecordKind,
    },

    /// No visible field is named `id` or annotated as the identifier.
    #[error("record type {type_name} has no identifier field")]
    NoIdentifierField { type_name: String },

    /// Two distinct fields both qualify as the identifier.
    #[error("record type {type_name} has multiple identifier fields: {first} and {second}")]
    MultipleIdentifierFields {
        type_name: String,
        first: String,
        second: String,
    },

    /// Another visible field shares the identifier's name, so its value cannot be read unambiguously.
    #[error("identifier field {field} of {type_name} is shadowed by another field of the same name")]
    ShadowedIdentifierField { type_name: String, field: String },

    /// The destination type of a lookup is not a struct with named fields.
    #[error("invalid destination: {type_name} is {kind}, expected a struct with named fields")]
    InvalidDestination {
        type_name: String,
        kind: RecordKind,
    },

    /// The identifier has no canonical text token (floats, maps, sequences, null).
    #[error("unsupported identifier for {type_name}: {kind} values cannot be rendered as a token")]
    UnsupportedIdentifier {
        type_name: String,
        kind: &'static str,
    },

    /// The identifier renders to a token that cannot be used as a path segment.
    #[error("invalid identifier {token:?} for {type_name}: {reason}")]
    InvalidIdentifier {
        type_name: String,
        token: String,
        reason: &'static str,
    },

    /// The descriptor names a field the record cannot produce a value for.
    #[error("record type {type_name} does not expose a value for field {field}")]
    MissingFieldValue { type_name: String, field: String },

    #[error("failed to encode {type_name}")]
    EncodingFailed {
        type_name: String,
        #[source]
        source: CodecError,
    },

    #[error("failed to decode {type_name} from {}", path.display())]
    DecodingFailed {
        type_name: String,
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("storage unavailable at {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write entity to {}", path.display())]
    StorageWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read entity from {}", path.display())]
    StorageReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Expected "not found" outcome of a lookup.
    #[error("no such entity: {type_name}/{id}")]
    NoSuchEntity { type_name: String, id: String },
}

impl StoreError {
    /// True for [`StoreError::NoSuchEntity`], the one non-exceptional outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NoSuchEntity { .. })
    }

    pub(crate) fn from_token(type_name: &str, err: TokenError) -> Self {
        match err {
            TokenError::Unsupported { kind } => StoreError::UnsupportedIdentifier {
                type_name: type_name.to_string(),
                kind,
            },
            TokenError::Invalid { token, reason } => StoreError::InvalidIdentifier {
                type_name: type_name.to_string(),
                token,
                reason,
            },
            TokenError::Capture(source) => StoreError::EncodingFailed {
                type_name: type_name.to_string(),
                source,
            },
        }
    }
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
