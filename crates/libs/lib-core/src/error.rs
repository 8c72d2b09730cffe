//! # Centralized Error Handling
//!
//! [`AppError`] is the error type the HTTP layer returns. Credential failures
//! convert into it with `?`, and each variant knows its HTTP status and the
//! message that is safe to show a client.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx)
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!    - [`InvalidCredentials`](AppError::InvalidCredentials) → 401 Unauthorized
//!    - [`Unauthorized`](AppError::Unauthorized) → 401 Unauthorized
//!    - [`TokenExpired`](AppError::TokenExpired) → 401 Unauthorized, code `TokenExpired`
//!    - [`Forbidden`](AppError::Forbidden) → 403 Forbidden
//!    - [`NotFound`](AppError::NotFound) → 404 Not Found
//!
//! 2. **Server Errors** (5xx)
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn check_password(matches: bool) -> Result<()> {
//!     if !matches {
//!         return Err(AppError::InvalidCredentials);
//!     }
//!     Ok(())
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input (bad body, bad email, chirp too long).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Login whose password did not verify.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Bearer token that is forged, malformed, or otherwise unacceptable.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bearer token was genuine but has expired.
    #[error("Token has expired")]
    TokenExpired,

    /// Action not allowed on this deployment.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (unexpected failures, hashing failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized(_) | AppError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Token failures all read the same so a client cannot probe which check
    /// failed; expiry is the exception.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::Forbidden(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::InvalidCredentials => self.to_string(),
            AppError::Unauthorized(_) => "Invalid or missing access token".to_string(),
            AppError::TokenExpired => "Access token has expired, please log in again".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    /// Machine-readable error code for response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::InvalidCredentials => "InvalidCredentials",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::TokenExpired => "TokenExpired",
            AppError::Forbidden(_) => "Forbidden",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

impl From<lib_auth::pwd::Error> for AppError {
    fn from(err: lib_auth::pwd::Error) -> Self {
        match &err {
            lib_auth::pwd::Error::EmptyPassword => AppError::InvalidInput(err.to_string()),
            lib_auth::pwd::Error::HashingFailure(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<lib_auth::token::Error> for AppError {
    fn from(err: lib_auth::token::Error) -> Self {
        if err.is_expired() {
            AppError::TokenExpired
        } else if err.is_token_invalid() {
            AppError::Unauthorized(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Request bodies that fail to parse are the client's fault.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("Invalid request body: {}", err))
    }
}
