//! Error types returned by every client operation.

use bytes::Bytes;
use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Failure while moving bytes to or from the provider.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("transport error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum StatuspageError {
    /// Malformed base URL, bad credential header, or a body that failed to encode.
    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-success status with a decodable provider error body.
    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
        errors: Vec<String>,
    },

    /// Non-success status without a recognisable error body.
    #[error("HTTP error: {status}")]
    Http { status: StatusCode, body: Bytes },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl StatuspageError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }

    /// Build the error for a non-success response from its status and raw body.
    pub(crate) fn from_response(status: StatusCode, body: Bytes) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(envelope) => match envelope.into_message() {
                Some((message, errors)) => Self::Api {
                    status,
                    message,
                    errors,
                },
                None => Self::Http { status, body },
            },
            Err(_) => Self::Http { status, body },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<Value>,
    error: Option<Value>,
    errors: Option<Value>,
}

/// Flatten an `error`/`errors` value into readable strings.
///
/// Accepts a string, a list, or a field map such as `{"name": ["can't be blank"]}`,
/// which becomes `"name: can't be blank"`. Anything else is ignored.
fn collect_messages(value: Value, field: Option<&str>, out: &mut Vec<String>) {
    match value {
        Value::String(s) => match field {
            Some(field) => out.push(format!("{field}: {s}")),
            None => out.push(s),
        },
        Value::Array(items) => {
            for item in items {
                collect_messages(item, field, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let nested = match field {
                    Some(field) => format!("{field}.{key}"),
                    None => key,
                };
                collect_messages(item, Some(nested.as_str()), out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

impl ErrorEnvelope {
    fn into_message(self) -> Option<(String, Vec<String>)> {
        let mut errors = Vec::new();
        for value in self.error.into_iter().chain(self.errors) {
            collect_messages(value, None, &mut errors);
        }

        match self.message {
            Some(Value::String(message)) => Some((message, errors)),
            _ if !errors.is_empty() => Some((errors.join("; "), errors)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_body(status: StatusCode, body: &str) -> StatuspageError {
        StatuspageError::from_response(status, Bytes::from(body.to_owned()))
    }

    #[test]
    fn test_message_envelope() {
        match from_body(StatusCode::NOT_FOUND, r#"{"message": "invalid page"}"#) {
            StatuspageError::Api {
                status,
                message,
                errors,
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "invalid page");
                assert!(errors.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_list_envelope() {
        let err = from_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error": ["Name can't be blank", "Status is invalid"]}"#,
        );
        match err {
            StatuspageError::Api { message, errors, .. } => {
                assert_eq!(message, "Name can't be blank; Status is invalid");
                assert_eq!(errors.len(), 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_message_wins_over_errors() {
        let err = from_body(
            StatusCode::BAD_REQUEST,
            r#"{"message": "bad request", "errors": "name is required"}"#,
        );
        match err {
            StatuspageError::Api { message, errors, .. } => {
                assert_eq!(message, "bad request");
                assert_eq!(errors, vec!["name is required".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_field_error_map_keeps_message() {
        let err = from_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message": "Validation failed", "errors": {"name": ["can't be blank"]}}"#,
        );
        match err {
            StatuspageError::Api {
                status,
                message,
                errors,
            } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(message, "Validation failed");
                assert_eq!(errors, vec!["name: can't be blank".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_objects_without_message() {
        let err = from_body(
            StatusCode::BAD_REQUEST,
            r#"{"errors": [{"status": ["is not included in the list"]}, "page is locked"]}"#,
        );
        match err {
            StatuspageError::Api { message, errors, .. } => {
                assert_eq!(
                    errors,
                    vec![
                        "status: is not included in the list".to_string(),
                        "page is locked".to_string(),
                    ]
                );
                assert_eq!(message, "status: is not included in the list; page is locked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_message_without_errors_is_http_error() {
        let err = from_body(StatusCode::BAD_REQUEST, r#"{"message": 42}"#);
        assert!(matches!(err, StatuspageError::Http { .. }));
    }

    #[test]
    fn test_unrecognised_body_is_http_error() {
        let err = from_body(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        match &err {
            StatuspageError::Http { status, body } => {
                assert_eq!(*status, StatusCode::BAD_GATEWAY);
                assert_eq!(&body[..], b"<html>bad gateway</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_envelope_without_message_is_http_error() {
        let err = from_body(StatusCode::INTERNAL_SERVER_ERROR, r#"{"status": 500}"#);
        assert!(matches!(err, StatuspageError::Http { .. }));
    }

    #[test]
    fn test_is_cancelled() {
        assert!(StatuspageError::from(TransportError::Cancelled).is_cancelled());
        assert!(!StatuspageError::from(TransportError::Timeout).is_cancelled());
    }
}
