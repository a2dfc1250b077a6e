//! Error types for the lending ledger

use thiserror::Error;

/// Main ledger error type.
///
/// Only user-facing faults live here. Expected negative outcomes of
/// normal use (a book being unavailable at checkout, a check-in that
/// does not match the active loan) are reported as outcome values by the
/// operations themselves, never as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Authentication failed: no user matches the supplied credentials")]
    UserNotFound,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("No book with reference number {0}")]
    BookNotFound(i32),

    #[error("A different book is already registered under reference number {0}")]
    DuplicateReference(i32),

    #[error("A different user is already registered under id {0}")]
    DuplicateUser(i32),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for LedgerError {
    fn from(errors: validator::ValidationErrors) -> Self {
        LedgerError::Validation(errors.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
