use serde_json::Value;

/// Failure of a single request, split by how far the request got.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: Value },
    /// The request left the client but no response arrived.
    #[error("no response from server: {0}")]
    NoResponse(String),
    /// The request could not be built, nothing was sent.
    #[error("request could not be built: {0}")]
    Request(String),
}
