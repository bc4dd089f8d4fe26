//! Field type capability and the built-in type catalog.

use std::fmt::{Debug, Display};
use std::hash::Hash;

mod builtin_types;
mod error;

pub use builtin_types::{Type, STRING_CAPACITY, STRING_LENGTH_PREFIX};
pub use error::TypeError;

/// Capability a field type must provide to be used in a schema descriptor.
///
/// Equality between two types is `Eq`; hashing must agree with it so that
/// descriptors built from these types can be used as map keys.
pub trait FieldType: Clone + Eq + Hash + Debug + Display + Send + Sync {
    /// Fixed serialized length in bytes of a value of this type.
    fn byte_len(&self) -> usize;
}
