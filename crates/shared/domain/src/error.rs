//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage backend).
//! Callers match on the variant, never on the message.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Client supplied malformed or out-of-policy data
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Entity absent (or logically deleted)
    #[error("{0} not found")]
    NotFound(String),

    /// Partial update carried no fields
    #[error("no fields to update")]
    NoFieldsToUpdate,

    /// State-machine violation on a terminal sale
    #[error("invalid transaction: {0}")]
    TransactionInvalid(String),

    /// Referenced user does not exist
    #[error("user {0} not found")]
    UserNotFound(String),

    /// Entity handed to a store without an identifier
    #[error("empty entity identifier")]
    EmptyIdentifier,

    /// Entity changed between read and write
    #[error("version conflict: {0}")]
    VersionConflict(String),

    /// Persistence layer failure
    #[error("storage failure: {0}")]
    Storage(String),

    /// Cross-service user check could not complete
    #[error("remote call failed: {0}")]
    RemoteCallFailed(String),
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create a transaction invalid error
    pub fn transaction_invalid(msg: impl Into<String>) -> Self {
        DomainError::TransactionInvalid(msg.into())
    }

    /// Create a user not found error
    pub fn user_not_found(id: impl Into<String>) -> Self {
        DomainError::UserNotFound(id.into())
    }

    /// Create a version conflict error
    pub fn version_conflict(msg: impl Into<String>) -> Self {
        DomainError::VersionConflict(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        DomainError::Storage(msg.into())
    }

    /// Create a remote call error
    pub fn remote_call_failed(msg: impl Into<String>) -> Self {
        DomainError::RemoteCallFailed(msg.into())
    }

    /// Whether this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first offending field, sorted for a stable message
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .first()
            .map(|(field, errs)| {
                errs.first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| format!("{}: {}", field, m))
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
            .unwrap_or_else(|| "validation failed".to_string());

        DomainError::InvalidInput(message)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
