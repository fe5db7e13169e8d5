//! API error types for the TRIZ Trade REST API client.

use thiserror::Error;

/// API-specific error type for the TRIZ Trade REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required or token rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(ErrorResponse),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(ErrorResponse),

    /// Invalid request parameters (400/422)
    #[error("Bad request: {0}")]
    BadRequest(ErrorResponse),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(ErrorResponse),

    /// Resource already exists (409)
    #[error("Conflict: {0}")]
    Conflict(ErrorResponse),

    /// Too many requests (429)
    #[error("Rate limited: {0}")]
    RateLimited(ErrorResponse),

    /// Endpoint exists but is not implemented by the backend (501)
    #[error("Not implemented: {0}")]
    NotImplemented(ErrorResponse),

    /// Server-side error (500)
    #[error("Server error: {0}")]
    ServerError(ErrorResponse),

    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unexpected HTTP status code
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, ErrorResponse),
}

impl ApiError {
    /// HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::BadRequest(_) => Some(400),
            ApiError::Conflict(_) => Some(409),
            ApiError::RateLimited(_) => Some(429),
            ApiError::ServerError(_) => Some(500),
            ApiError::NotImplemented(_) => Some(501),
            ApiError::UnexpectedStatus(code, _) => Some(*code),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Deserialize(_) | ApiError::InvalidParameter(_) => None,
        }
    }

    /// The parsed error response body, if this error carries one.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            ApiError::Unauthorized(r)
            | ApiError::NotFound(r)
            | ApiError::BadRequest(r)
            | ApiError::Forbidden(r)
            | ApiError::Conflict(r)
            | ApiError::RateLimited(r)
            | ApiError::NotImplemented(r)
            | ApiError::ServerError(r)
            | ApiError::UnexpectedStatus(_, r) => Some(r),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error response format from the API.
///
/// The backend emits FastAPI-style `{"detail": ...}` bodies; older endpoints
/// use `message`/`error` keys, so all three are accepted.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorResponse {
    /// Error status (usually "error")
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable error message
    #[serde(alias = "detail", alias = "error")]
    pub message: Option<String>,
    /// Additional error details
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Wrap a raw body that could not be parsed as a structured error.
    pub fn from_text(text: String) -> Self {
        Self {
            status: None,
            message: Some(text),
            details: None,
        }
    }

    /// Get the error message, preferring `message` over `details`.
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.details.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_message())?;
        if self.message.is_some() {
            if let Some(details) = &self.details {
                write!(f, ": {}", details)?;
            }
        }
        Ok(())
    }
}
