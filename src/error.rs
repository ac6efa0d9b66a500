//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// The two business errors raised by the transaction flow are
/// `AccountNotFound` and `InsufficientFunds`. Storage failures are wrapped
/// in `Database` and passed through to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, constraint violation).
    ///
    /// Wraps any sqlx::Error via `#[from]`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No account exists with the given identifier.
    ///
    /// Returns HTTP 404 Not Found. Carries the requested id.
    #[error("Account with ID {0} not found")]
    AccountNotFound(String),

    /// `amount + fee` exceeds the account's current balance.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient balance for transaction")]
    InsufficientFunds,

    /// Another account already uses this account number.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Account number {0} already exists")]
    DuplicateAccountNumber(String),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Shorthand used by services and stores.
pub type AppResult<T> = Result<T, AppError>;

/// Convert AppError into an HTTP response.
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// `Database` errors are logged and hidden from the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::AccountNotFound(_) => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::InsufficientFunds => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "insufficient_funds",
                self.to_string(),
            ),
            AppError::DuplicateAccountNumber(_) => (
                StatusCode::CONFLICT,
                "duplicate_account_number",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
