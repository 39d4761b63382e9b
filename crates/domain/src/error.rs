//! Unified error types for the domain layer
//!
//! Draft constructors validate raw form input and report the first problem
//! they find. The player crate maps these onto user-facing toasts.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field was empty after trimming
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    /// A required numeric field did not contain an integer
    #[error("Field is not a number: {0}")]
    NotANumber(&'static str),

    /// Validation failed for any other reason
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if count == 0 {
    ///     return Err(DomainError::validation("Group must contain at least one monster"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_field() {
        let err = DomainError::NotANumber("max_hp");
        assert_eq!(err.to_string(), "Field is not a number: max_hp");
    }
}
