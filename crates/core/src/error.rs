use crate::types::DbId;

/// Domain-level error type shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced record does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// User input failed a validation rule. The message is shown verbatim
    /// to the user.
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
