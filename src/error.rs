//! Error types for the Upbit REST client.
//!
//! All fallible operations in this crate return [`Result<T>`]. The error
//! taxonomy mirrors the layers a request passes through:
//!
//! - [`Error::Authentication`] - missing or malformed credentials, token
//!   construction failure (raised before any network call)
//! - [`Error::Network`] - transport-level failures (DNS, connect, timeout)
//! - [`Error::HttpStatus`] - the service answered with a non-2xx status
//! - [`Error::Parse`] - the response body is not the expected shape
//! - [`Error::InvalidArgument`] - caller-supplied value rejected up front
//!
//! No retries are performed anywhere in the crate; every error surfaces
//! directly to the caller.

use thiserror::Error;

/// Result type alias for all client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum number of bytes of a response body embedded in an error.
///
/// Keeps errors small when the service returns a large HTML error page.
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error type for all Upbit client operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Credential or token construction failure.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Network/transport layer failure.
    #[error("network error: {0}")]
    Network(String),

    /// The service returned a non-success HTTP status.
    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, truncated to [`MAX_ERROR_BODY_LENGTH`] bytes.
        body: String,
    },

    /// Response body could not be parsed into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A caller-supplied argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Error::Authentication(msg.into())
    }

    /// Creates a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }

    /// Creates an HTTP status error, truncating the body if oversized.
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Error::HttpStatus {
            status,
            body: truncate_body(body.into()),
        }
    }

    /// Creates a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Returns `true` if this error originated in the transport layer.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Error::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            Error::Parse(format!("response decoding failed: {err}"))
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Truncates a response body on a char boundary.
fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body;
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &body[..end], body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_truncates_large_body() {
        let body = "x".repeat(2000);
        let err = Error::http_status(502, body);
        match err {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert!(body.len() < 600);
                assert!(body.contains("2000 bytes total"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_http_status_keeps_small_body() {
        let err = Error::http_status(401, r#"{"error":"invalid token"}"#);
        assert_eq!(
            err.to_string(),
            r#"HTTP status 401: {"error":"invalid token"}"#
        );
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(
            Error::authentication("missing access key").to_string(),
            "authentication error: missing access key"
        );
        assert!(Error::network("dns failure").is_network());
        assert!(!Error::parse("bad json").is_network());
    }
}
