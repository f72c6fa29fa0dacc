//! Records - the descriptor interface the store inspects to find identifiers.
//!
//! A record type describes itself through [`Record::descriptor`]: its type
//! name, its kind and its visible fields in declared order. Values are read
//! back by field name through [`Record::field_value`]. Both are normally
//! generated by `#[derive(Record)]`.
//!
//! ## Example
//!
//! ```ignore
//! use burrow_db::Record;
//!
//! #[derive(Serialize, Deserialize, Record)]
//! struct Widget {
//!     name: String,
//!     #[burrow(id)]
//!     num: i64,
//! }
//!
//! let field = burrow_db::resolve_identifier_field(&Widget::descriptor())?;
//! assert_eq!(field.name(), "num");
//! ```

mod resolver;
mod token;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::codec::CodecError;

pub use resolver::resolve_identifier_field;
pub use token::{IdToken, TokenError};

/// Reserved name that designates the identifier, by field name or annotation.
pub const ID_NAME: &str = "ID";

/// Trait for types that can be stored as records.
pub trait Record: Serialize + DeserializeOwned {
    /// Describes the type: namespace name, kind and visible fields.
    fn descriptor() -> RecordDescriptor;

    /// Returns the current value of a visible field, or `None` if no such field exists.
    fn field_value(&self, field: &str) -> Option<Result<FieldValue, CodecError>>;
}

/// The runtime shape of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A struct with named fields, the only storable shape.
    Struct,
    Tuple,
    Unit,
    Enum,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Struct => write!(f, "a struct"),
            RecordKind::Tuple => write!(f, "a tuple struct"),
            RecordKind::Unit => write!(f, "a unit struct"),
            RecordKind::Enum => write!(f, "an enum"),
        }
    }
}

/// A visible field: its name and its `#[burrow(tag = "...")]` annotation, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    annotation: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, annotation: Option<&str>) -> Self {
        Self {
            name: name.into(),
            annotation: annotation.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// True if the field is named `id` (any ASCII case) or annotated `ID`.
    pub fn is_identifier(&self) -> bool {
        self.name.eq_ignore_ascii_case(ID_NAME) || self.annotation() == Some(ID_NAME)
    }
}

/// Type name, kind and ordered visible fields of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    type_name: String,
    kind: RecordKind,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new(type_name: impl Into<String>, kind: RecordKind, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            fields,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Consumes the descriptor, yielding its fields. Used to splice flattened records.
    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        self.fields
    }

    pub fn is_struct(&self) -> bool {
        self.kind == RecordKind::Struct
    }
}

/// A field value captured through serde's data model.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue(serde_json::Value);

impl FieldValue {
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Captures any serializable value as a [`FieldValue`]. Called by derived `field_value`.
pub fn capture_field<T: Serialize + ?Sized>(value: &T) -> Result<FieldValue, CodecError> {
    serde_json::to_value(value)
        .map(FieldValue)
        .map_err(|e| Box::new(e) as CodecError)
}
