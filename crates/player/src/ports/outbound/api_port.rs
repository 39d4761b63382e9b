//! API Port - Typed HTTP boundary for application services
//!
//! `ApiPort` is generic over request/response types and therefore not
//! object-safe. Services are generic over it; the composition root stores an
//! object-safe [`RawApiPort`](super::RawApiPort) and wraps it in the typed
//! `Api` adapter from the application layer.

use serde::{de::DeserializeOwned, Serialize};

/// Errors surfaced by the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: DNS, connection refused, timeout, aborted fetch
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },
    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn post_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;

    async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
