//! Schema error types.

use thiserror::Error;

/// Schema descriptor errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Field index outside `0..len`
    #[error("Field index {index} out of range (schema has {len} fields)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No field carries the requested name
    #[error("Field {} not found", display_name(.name))]
    FieldNotFound { name: Option<String> },

    /// Construction input rejected
    #[error("Invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// Record size does not fit in `usize`
    #[error("Capacity overflow during {operation}")]
    CapacityOverflow { operation: &'static str },

    /// Snapshot could not be encoded or decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn display_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("'{}'", name),
        None => "null".to_string(),
    }
}
