use tracing::trace;

use super::{FieldDescriptor, RecordDescriptor};
use crate::error::{Result, StoreError};

/// Finds the single identifier field of a record type.
///
/// Every visible field is scanned in declared order. A field qualifies if it
/// is named `id` or annotated `ID`; a field qualifying both ways counts once.
/// A second qualifying field is an error, never a tie-break.
pub fn resolve_identifier_field(descriptor: &RecordDescriptor) -> Result<&FieldDescriptor> {
    let mut found: Option<&FieldDescriptor> = None;

    for field in descriptor.fields() {
        if !field.is_identifier() {
            continue;
        }
        if let Some(first) = found {
            return Err(StoreError::MultipleIdentifierFields {
                type_name: descriptor.type_name().to_string(),
                first: first.name().to_string(),
                second: field.name().to_string(),
            });
        }
        found = Some(field);
    }

    let field = found.ok_or_else(|| StoreError::NoIdentifierField {
        type_name: descriptor.type_name().to_string(),
    })?;

    // Values are looked up by name; a flattened record may repeat it.
    let namesakes = descriptor
        .fields()
        .iter()
        .filter(|other| other.name() == field.name())
        .count();
    if namesakes > 1 {
        return Err(StoreError::ShadowedIdentifierField {
            type_name: descriptor.type_name().to_string(),
            field: field.name().to_string(),
        });
    }

    trace!(
        type_name = descriptor.type_name(),
        field = field.name(),
        "resolved identifier field"
    );
    Ok(field)
}
