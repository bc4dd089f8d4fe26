//! Field definition within a schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{FieldType, Type};

/// One typed, optionally named column of a record.
///
/// `None` and `Some("")` are different names: name lookup never matches
/// a `None` query, while an empty string is an ordinary name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor<T = Type> {
    /// Field type
    #[serde(rename = "type")]
    field_type: T,
    /// Field name (absent for unnamed fields)
    #[serde(default)]
    name: Option<String>,
}

impl<T: FieldType> FieldDescriptor<T> {
    /// Creates a new field descriptor.
    pub fn new(field_type: T, name: Option<String>) -> Self {
        Self { field_type, name }
    }

    /// Creates a field whose name is the empty string.
    pub fn anonymous(field_type: T) -> Self {
        Self::new(field_type, Some(String::new()))
    }

    /// Returns the field type.
    pub fn field_type(&self) -> &T {
        &self.field_type
    }

    /// Returns the field name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the fixed byte length of this field.
    pub fn byte_len(&self) -> usize {
        self.field_type.byte_len()
    }

    /// Checks whether this field answers to `name`. An absent query never matches.
    pub(crate) fn matches_name(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) => self.name.as_deref() == Some(name),
            None => false,
        }
    }
}

impl<T: FieldType> fmt::Display for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}({})", name, self.field_type),
            None => write!(f, "null({})", self.field_type),
        }
    }
}
