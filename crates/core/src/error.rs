use crate::types::DbId;

/// Domain-level error type shared by the repository and API layers.
///
/// The API layer maps each variant onto an HTTP status; see the
/// `IntoResponse` impl in `awfm-api`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist (lookup by internal ID).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A referenced entity does not exist (lookup by client-facing key).
    #[error("{entity} with key '{key}' not found")]
    UnknownKey { entity: &'static str, key: String },

    /// A submitted value violates a domain constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A write conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
