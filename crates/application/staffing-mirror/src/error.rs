use serde_json::Value;
use staffing_transport::TransportError;

/// Human-readable failure recorded in a mirror's `last_error` and, for writes,
/// returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MirrorError {
    #[error("Error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Network error: could not reach the server. Check your connection or the backend status.")]
    NoResponse,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Received unexpected data format from server.")]
    UnexpectedFormat,
}

impl MirrorError {
    /// Map a transport failure, using `fallback` when the server gave no message.
    pub fn from_transport(err: TransportError, fallback: &str) -> Self {
        match err {
            TransportError::Status { status, body } => MirrorError::Server {
                status,
                message: server_message(&body).unwrap_or_else(|| fallback.to_string()),
            },
            TransportError::NoResponse(_) => MirrorError::NoResponse,
            TransportError::Request(detail) => MirrorError::Unexpected(detail),
        }
    }
}

/// The backend answers either `{"message": ...}` or a bare text body.
fn server_message(body: &Value) -> Option<String> {
    let message = match body {
        Value::Object(map) => map.get("message").and_then(Value::as_str),
        Value::String(text) => Some(text.as_str()),
        _ => None,
    }?;
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_field_is_preferred() {
        let err = MirrorError::from_transport(
            TransportError::Status {
                status: 404,
                body: json!({"message": "not found"}),
            },
            "Failed to load data.",
        );
        assert_eq!(err.to_string(), "Error 404: not found");
    }

    #[test]
    fn plain_text_body_is_used_as_message() {
        let err = MirrorError::from_transport(
            TransportError::Status {
                status: 409,
                body: Value::String("Employee is already terminated".into()),
            },
            "Could not terminate employee.",
        );
        assert_eq!(err.to_string(), "Error 409: Employee is already terminated");
    }

    #[test]
    fn fallback_when_body_has_no_message() {
        let err = MirrorError::from_transport(
            TransportError::Status {
                status: 400,
                body: json!({"firstName": "must not be blank"}),
            },
            "Could not add employee.",
        );
        assert_eq!(err.to_string(), "Error 400: Could not add employee.");

        let err = MirrorError::from_transport(
            TransportError::Status {
                status: 500,
                body: Value::Null,
            },
            "Failed to load data.",
        );
        assert_eq!(err.to_string(), "Error 500: Failed to load data.");
    }

    #[test]
    fn no_response_and_request_failures() {
        assert_eq!(
            MirrorError::from_transport(TransportError::NoResponse("refused".into()), "x"),
            MirrorError::NoResponse
        );
        assert_eq!(
            MirrorError::from_transport(TransportError::Request("bad url".into()), "x")
                .to_string(),
            "An unexpected error occurred: bad url"
        );
    }
}
