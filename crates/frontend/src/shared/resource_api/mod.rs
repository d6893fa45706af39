//! Store-scoped REST resource access.
//!
//! `ResourceApi` is the seam between form controllers and the backend; the
//! browser implementation lives in [`http`], tests provide recording mocks.

pub mod http;
pub mod loaders;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpResourceApi;

/// Failure of a resource request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// 409 - the backend refused because dependent records exist
    #[error("Conflict with dependent records (HTTP 409)")]
    Conflict,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx status
    pub fn from_status(status: u16) -> Self {
        match status {
            409 => ApiError::Conflict,
            other => ApiError::Status(other),
        }
    }
}

/// Mutating requests against `/api/{store}/{collection}[/{id}]`.
///
/// Any 2xx response is success; everything else is an `ApiError`.
#[async_trait(?Send)]
pub trait ResourceApi: Send + Sync {
    /// POST `path` with a JSON body
    async fn create(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError>;

    /// PATCH `path` with a JSON body
    async fn update(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError>;

    /// DELETE `path`
    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(409), ApiError::Conflict);
        assert_eq!(ApiError::from_status(400), ApiError::Status(400));
        assert_eq!(ApiError::from_status(500).to_string(), "HTTP 500");
    }
}
