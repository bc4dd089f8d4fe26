//! JSON snapshots of schema descriptors.
//!
//! A snapshot lists the fields in declaration order:
//!
//! ```json
//! { "fields": [ { "type": "INT_TYPE", "name": "id" }, { "type": "STRING_TYPE", "name": null } ] }
//! ```
//!
//! A missing `name` key restores as an absent name, same as `null`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::SchemaConfig;
use crate::error::SchemaError;
use crate::schema::SchemaDescriptor;
use crate::types::FieldType;

impl<T> SchemaDescriptor<T>
where
    T: FieldType + Serialize + DeserializeOwned,
{
    /// Encodes this descriptor as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SchemaError::SerializationError(e.to_string()))
    }

    /// Restores a descriptor from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Self::from_json_with(json, &SchemaConfig::default())
    }

    /// Restores a descriptor from JSON and checks it against `config`.
    ///
    /// # Returns
    /// `SerializationError` for malformed input, `InvalidSchema` when the
    /// restored descriptor violates `config`, `CapacityOverflow` when its
    /// record size does not fit in `usize`.
    pub fn from_json_with(json: &str, config: &SchemaConfig) -> Result<Self, SchemaError> {
        let descriptor: Self = serde_json::from_str(json).map_err(|e| {
            SchemaError::SerializationError(format!("Failed to parse schema: {}", e))
        })?;
        descriptor.validate(config)?;
        let record_size = descriptor.size()?;

        tracing::debug!(
            "Restored schema with {} fields ({} bytes per record)",
            descriptor.num_fields(),
            record_size
        );
        Ok(descriptor)
    }
}
