//! Schema construction configuration.

/// Limits applied when building a descriptor through
/// [`SchemaDescriptor::with_config`](crate::SchemaDescriptor::with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Reject descriptors with zero fields
    pub require_fields: bool,
    /// Maximum number of fields per descriptor
    pub max_fields: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            require_fields: false, // zero-field schemas are accepted by default
            max_fields: usize::MAX,
        }
    }
}

impl SchemaConfig {
    /// Configuration that requires at least one field.
    pub fn strict() -> Self {
        Self {
            require_fields: true,
            ..Default::default()
        }
    }

    /// Checks a field count against the configured limits.
    ///
    /// # Returns
    /// `Ok(())` if the count is acceptable, otherwise the rejection reason.
    pub(crate) fn check_field_count(&self, count: usize) -> Result<(), String> {
        if self.require_fields && count == 0 {
            return Err("schema must contain at least one field".to_string());
        }
        if count > self.max_fields {
            return Err(format!(
                "schema has {} fields, limit is {}",
                count, self.max_fields
            ));
        }
        Ok(())
    }
}
