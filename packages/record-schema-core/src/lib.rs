//! Schema descriptors for fixed-layout records.
//!
//! Provides the field type capability, an ordered immutable schema
//! descriptor, record layout helpers, and serde snapshots of schemas.

pub mod config;
pub mod error;
pub mod persistence;
pub mod schema;
pub mod types;

pub use error::SchemaError;
pub use schema::{FieldDescriptor, SchemaDescriptor};
pub use types::{FieldType, Type};
