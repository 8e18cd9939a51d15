//! Domain error taxonomy.
//!
//! Every fallible core operation surfaces one of these variants. The API
//! layer maps them to HTTP statuses; raw store error text is never shown
//! to clients (only `ExpansionFailed` carries an underlying cause, and the
//! API layer logs it instead of serializing it).

use crate::types::DbId;

/// Domain-level error shared across all core operations.
///
/// All variants are terminal for the calling use case; nothing in the core
/// retries. `StoreUnavailable` is the only variant a caller may reasonably
/// retry with backoff.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No valid identity for the request.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Valid identity, insufficient role or scope.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Entity absent, or present but outside the caller's tenant/salon
    /// scope. The two cases are deliberately indistinguishable so an
    /// unauthorized caller cannot confirm existence.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The acting user has no accessible salon at all. Callers must treat
    /// this as a hard stop, never guess a default scope.
    #[error("No accessible salon for this user")]
    NoAccessibleSalon,

    /// Malformed or inverted date range.
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// A request payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A shift expansion transaction failed and was rolled back. Partial
    /// generation is never observable; the whole call failed as a unit.
    #[error("Shift expansion failed")]
    ExpansionFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The external data store did not respond.
    #[error("Data store unavailable")]
    StoreUnavailable,

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the `NotFound` variant.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }

    /// Stable machine-readable code for logging and client dispatch.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Unauthenticated(_) => "UNAUTHENTICATED",
            CoreError::Forbidden(_) => "FORBIDDEN",
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::NoAccessibleSalon => "NO_ACCESSIBLE_SALON",
            CoreError::InvalidRange(_) => "INVALID_RANGE",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::ExpansionFailed(_) => "EXPANSION_FAILED",
            CoreError::StoreUnavailable => "STORE_UNAVAILABLE",
            CoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
