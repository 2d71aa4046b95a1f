//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the back-office API.
///
/// Status codes the back office uses deliberately get their own variant;
/// everything else lands in [`ApiError::Api`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 400: the request was malformed or rejected by a business rule.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// 401: the session token is missing, invalid, or expired.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// 404: the resource does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// 422: the server-side validation failed.
    #[error("validation failed: {message}")]
    Unprocessable { message: String },

    /// 5xx: the server failed.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status code, when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Unprocessable { .. } => Some(422),
            Self::Server { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
