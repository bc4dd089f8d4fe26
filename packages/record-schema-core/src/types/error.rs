/// Error type for type catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("Type '{type_id}' not found")]
    NotFound { type_id: String },
}
