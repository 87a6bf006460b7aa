//! Error types for talking to the remote file service.

use thiserror::Error;

/// Normalized error raised by the API gateway.
///
/// Callers never see raw transport-layer failures: the gateway folds every
/// failure mode into one of these variants before returning.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server's `error` body field when the body parses as
    /// JSON, otherwise a synthesized `HTTP <status>` string.
    #[error("{message}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable message for display.
        message: String,
    },

    /// The request never produced a response (connection refused, DNS
    /// failure, broken stream).
    #[error("request failed: {0}")]
    Transport(String),

    /// A success response carried a body the client could not decode.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if this error came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
