pub mod error;
pub mod http;
pub mod request;

// Re-exports for convenience
pub use error::TransportError;
pub use http::{default_http_client, HttpTransport};
pub use request::{ApiPath, ApiRequest, ApiResponse};
pub use reqwest::Method;

/// One HTTP exchange against the configured backend.
///
/// Implementations perform exactly one request per call: no retries, no
/// interceptors, no caching.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
