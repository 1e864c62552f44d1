//! Domain layer errors.
//!
//! Business rule violations and persistence failures surfaced by
//! repositories. Command validation has its own error type,
//! [`CreateFavoriteSourceError`](crate::CreateFavoriteSourceError).

use thiserror::Error;

/// Domain layer error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Business rule violation, such as a duplicate favorite source.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Persistence layer error (abstracted).
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
