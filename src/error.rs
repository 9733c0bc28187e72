//! Error types for the KillB API client.
//!
//! Every fallible operation in this crate returns [`Error`]. The three
//! variants callers usually branch on are [`Error::Configuration`],
//! [`Error::Authentication`] and [`Error::Api`]; the rest describe
//! transport or caller-input problems.

use thiserror::Error;

/// A specialized `Result` type for KillB operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all KillB API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client could not be configured (unknown environment tag,
    /// unusable base URL, missing environment variables).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Login failed, the API answered 401, or a refresh was attempted
    /// without credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// API returned a non-success status, or a body that could not be parsed.
    #[error("API error: status={status}, message={message}, body={body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: String,
    },

    /// HTTP transport failed (connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Configuration(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status attached to the error, if the API produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a failed response.
    ///
    /// JSON bodies shaped like `{"message": ...}` or
    /// `{"error": {"message": ...}}` contribute their message; anything
    /// else falls back to the raw body text.
    pub(crate) fn from_api_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .or_else(|| json.get("error").and_then(|e| e.get("message")))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| body.clone());

        Error::Api {
            status,
            message,
            body,
        }
    }

    /// Create an API error for a success response whose body did not decode.
    pub(crate) fn undecodable(status: u16, body: String, err: serde_json::Error) -> Self {
        Error::Api {
            status,
            message: format!("invalid response body: {}", err),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_auth() {
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(!Error::Configuration("bad".into()).is_auth_error());
    }

    #[test]
    fn test_from_api_response_plain_text() {
        let err = Error::from_api_response(500, "internal error".to_string());
        assert!(err.is_server_error());
        assert_eq!(err.status(), Some(500));

        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("internal error"));
    }

    #[test]
    fn test_from_api_response_json_message() {
        let body = serde_json::json!({
            "error": {
                "code": "INVALID_QUOTATION",
                "message": "Quotation expired"
            }
        })
        .to_string();

        match Error::from_api_response(400, body) {
            Error::Api {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Quotation expired");
                assert!(body.contains("INVALID_QUOTATION"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::from_api_response(404, String::new()).is_client_error());
        assert!(Error::InvalidInput("x".into()).is_client_error());
        assert!(!Error::from_api_response(503, String::new()).is_client_error());
    }
}
