//! Fixed-layout record size and offset calculation.

use super::field::FieldDescriptor;
use crate::error::SchemaError;
use crate::types::FieldType;

/// Calculates the record size from field definitions.
///
/// Fields are packed back to back without padding, so the record size is
/// the sum of all field byte lengths.
///
/// # Returns
/// `Result<usize, SchemaError>`; `CapacityOverflow` if the sum exceeds `usize`.
pub(crate) fn record_size<T: FieldType>(
    fields: &[FieldDescriptor<T>],
) -> Result<usize, SchemaError> {
    fields.iter().try_fold(0usize, |size, field| {
        size.checked_add(field.byte_len())
            .ok_or(SchemaError::CapacityOverflow {
                operation: "record size calculation",
            })
    })
}

/// Calculates the byte offset of every field in declaration order.
pub(crate) fn field_offsets<T: FieldType>(
    fields: &[FieldDescriptor<T>],
) -> Result<Vec<usize>, SchemaError> {
    let mut offsets = Vec::with_capacity(fields.len());
    let mut current = 0usize;
    for field in fields {
        offsets.push(current);
        current = current
            .checked_add(field.byte_len())
            .ok_or(SchemaError::CapacityOverflow {
                operation: "field offset calculation",
            })?;
    }
    Ok(offsets)
}
