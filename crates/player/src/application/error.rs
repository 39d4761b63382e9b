//! Service layer error types

use skirmish_domain::DomainError;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The backend call failed (transport, status, or body shape)
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Form input was rejected before anything was sent
    #[error("Invalid input: {0}")]
    Validation(#[from] DomainError),
}
