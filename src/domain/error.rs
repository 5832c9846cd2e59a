//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors: input validation failures and internal tree defects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Invalid number format. Please enter valid integers. (got '{token}')")]
    MalformedInput { token: String },

    #[error("failed to serialize tree: {0}")]
    Serialization(String),
}

impl DomainError {
    /// True for errors caused by what the user typed, as opposed to defects.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::MalformedInput { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
