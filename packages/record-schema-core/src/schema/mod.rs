//! Field descriptors, schema descriptors, and record layout.

mod descriptor;
mod field;
pub(crate) mod layout;

pub use descriptor::SchemaDescriptor;
pub use field::FieldDescriptor;
