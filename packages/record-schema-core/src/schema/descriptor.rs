//! Ordered, immutable schema of a fixed-layout record.
//!
//! A descriptor is built once and never changes afterwards:
//! - Field order is declaration order and is kept by every operation
//! - Equality and hashing look at field types only, never at names
//! - Merging produces a new descriptor and leaves both inputs untouched

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::config::SchemaConfig;
use crate::error::SchemaError;
use crate::types::{FieldType, Type};

use super::field::FieldDescriptor;
use super::layout;

/// Schema of a fixed-layout record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDescriptor<T = Type> {
    /// Field definitions in declaration order
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: FieldType> SchemaDescriptor<T> {
    /// Creates a descriptor by pairing `types[i]` with `names[i]`.
    ///
    /// # Arguments
    /// * `types` - Field types in declaration order
    /// * `names` - Field names, `None` for unnamed fields
    ///
    /// # Returns
    /// `Result<SchemaDescriptor, SchemaError>`; fails with `InvalidSchema`
    /// when the two lists have different lengths.
    pub fn new(types: Vec<T>, names: Vec<Option<String>>) -> Result<Self, SchemaError> {
        if types.len() != names.len() {
            tracing::warn!(
                "Rejecting schema: {} types but {} names",
                types.len(),
                names.len()
            );
            return Err(SchemaError::InvalidSchema {
                reason: format!(
                    "{} field types but {} field names",
                    types.len(),
                    names.len()
                ),
            });
        }

        let fields = types
            .into_iter()
            .zip(names)
            .map(|(ty, name)| FieldDescriptor::new(ty, name))
            .collect();
        Ok(Self { fields })
    }

    /// Creates a descriptor whose field names are all the empty string.
    pub fn anonymous(types: Vec<T>) -> Self {
        Self {
            fields: types.into_iter().map(FieldDescriptor::anonymous).collect(),
        }
    }

    /// Creates a descriptor like [`new`](Self::new), then checks the
    /// field count against `config`.
    pub fn with_config(
        types: Vec<T>,
        names: Vec<Option<String>>,
        config: &SchemaConfig,
    ) -> Result<Self, SchemaError> {
        let descriptor = Self::new(types, names)?;
        descriptor.validate(config)?;
        Ok(descriptor)
    }

    /// Creates a descriptor from already paired field descriptors.
    pub fn from_fields(fields: Vec<FieldDescriptor<T>>) -> Self {
        Self { fields }
    }

    /// Checks this descriptor against the limits in `config`.
    pub fn validate(&self, config: &SchemaConfig) -> Result<(), SchemaError> {
        config.check_field_count(self.fields.len()).map_err(|reason| {
            tracing::warn!("Rejecting schema: {}", reason);
            SchemaError::InvalidSchema { reason }
        })
    }

    /// Returns the number of fields.
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the descriptor has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field at index `i`.
    pub fn field(&self, i: usize) -> Result<&FieldDescriptor<T>, SchemaError> {
        self.fields.get(i).ok_or(SchemaError::IndexOutOfRange {
            index: i,
            len: self.fields.len(),
        })
    }

    /// Returns the (possibly absent) name of the field at index `i`.
    pub fn field_name(&self, i: usize) -> Result<Option<&str>, SchemaError> {
        self.field(i).map(FieldDescriptor::name)
    }

    /// Returns the type of the field at index `i`.
    pub fn field_type(&self, i: usize) -> Result<&T, SchemaError> {
        self.field(i).map(FieldDescriptor::field_type)
    }

    /// Returns a read-only view of all fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Iterates over the fields in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor<T>> {
        self.fields.iter()
    }

    /// Finds the index of the first field named `name`.
    ///
    /// An absent name (`None`) never matches, even against fields whose
    /// own name is absent.
    ///
    /// # Returns
    /// `Result<usize, SchemaError>` with the smallest matching index, or
    /// `FieldNotFound`.
    pub fn field_name_to_index(&self, name: Option<&str>) -> Result<usize, SchemaError> {
        self.fields
            .iter()
            .position(|f| f.matches_name(name))
            .ok_or_else(|| SchemaError::FieldNotFound {
                name: name.map(str::to_string),
            })
    }

    /// Finds the index of the first field named `name`.
    pub fn index_of(&self, name: &str) -> Result<usize, SchemaError> {
        self.field_name_to_index(Some(name))
    }

    /// Returns the size in bytes of a record described by this schema.
    ///
    /// # Returns
    /// `Result<usize, SchemaError>`; `CapacityOverflow` if the field widths
    /// add up past `usize::MAX`.
    pub fn size(&self) -> Result<usize, SchemaError> {
        layout::record_size(&self.fields)
    }

    /// Returns the byte offset of field `i` within a record.
    pub fn field_offset(&self, i: usize) -> Result<usize, SchemaError> {
        let len = self.fields.len();
        if i >= len {
            return Err(SchemaError::IndexOutOfRange { index: i, len });
        }
        layout::record_size(&self.fields[..i])
    }

    /// Returns the byte offsets of all fields in declaration order.
    pub fn field_offsets(&self) -> Result<Vec<usize>, SchemaError> {
        layout::field_offsets(&self.fields)
    }

    /// Merges two descriptors: all fields of `first` followed by all
    /// fields of `second`, names included.
    pub fn merge(first: &Self, second: &Self) -> Self {
        let mut fields = Vec::with_capacity(first.fields.len() + second.fields.len());
        fields.extend(first.fields.iter().cloned());
        fields.extend(second.fields.iter().cloned());

        tracing::debug!(
            "Merged schemas of {} and {} fields",
            first.fields.len(),
            second.fields.len()
        );
        Self { fields }
    }
}

impl<T: FieldType> PartialEq for SchemaDescriptor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.field_type() == b.field_type())
    }
}

impl<T: FieldType> Eq for SchemaDescriptor<T> {}

impl<T: FieldType> Hash for SchemaDescriptor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Names are not part of equality, so they stay out of the hash.
        self.fields.len().hash(state);
        for field in &self.fields {
            field.field_type().hash(state);
        }
    }
}

impl<T: FieldType> fmt::Display for SchemaDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl<T: FieldType> FromIterator<FieldDescriptor<T>> for SchemaDescriptor<T> {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor<T>>>(iter: I) -> Self {
        Self::from_fields(iter.into_iter().collect())
    }
}

impl<'a, T: FieldType> IntoIterator for &'a SchemaDescriptor<T> {
    type Item = &'a FieldDescriptor<T>;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<T: FieldType> Default for SchemaDescriptor<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}
