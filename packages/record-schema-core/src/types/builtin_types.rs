use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TypeError;
use super::FieldType;

/// Maximum number of string bytes stored in a `Type::String` field.
pub const STRING_CAPACITY: usize = 128;

/// Length prefix written in front of string data (u32).
pub const STRING_LENGTH_PREFIX: usize = 4;

/// Built-in field types.
///
/// Each variant has a fixed on-disk length, so a record made of these
/// types has a size known from its schema alone.
///
/// Serialized as the catalog name; deserialized through [`Type::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Type {
    /// 32-bit signed integer
    #[serde(rename = "INT_TYPE")]
    Int,
    /// Fixed-capacity UTF-8 string (length prefix + `STRING_CAPACITY` bytes)
    #[serde(rename = "STRING_TYPE")]
    String,
}

impl Type {
    /// Returns every type in the catalog.
    pub fn all() -> &'static [Type] {
        &[Type::Int, Type::String]
    }

    /// Returns the catalog name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "INT_TYPE",
            Type::String => "STRING_TYPE",
        }
    }

    /// Resolves a type by catalog name.
    ///
    /// Accepts the catalog name (`INT_TYPE`) or the short form (`int`),
    /// case-insensitively.
    ///
    /// # Returns
    /// `Ok(Type)` if the name is known, `Err(TypeError::NotFound)` otherwise.
    pub fn parse(type_id: &str) -> Result<Type, TypeError> {
        match type_id.to_ascii_lowercase().as_str() {
            "int" | "int_type" => Ok(Type::Int),
            "string" | "string_type" => Ok(Type::String),
            _ => Err(TypeError::NotFound {
                type_id: type_id.to_string(),
            }),
        }
    }
}

impl FieldType for Type {
    fn byte_len(&self) -> usize {
        match self {
            Type::Int => 4,
            Type::String => STRING_LENGTH_PREFIX + STRING_CAPACITY,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Type {
    type Error = TypeError;

    fn try_from(type_id: String) -> Result<Self, Self::Error> {
        Type::parse(&type_id)
    }
}

impl std::str::FromStr for Type {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::parse(s)
    }
}
