//! # Error Handling Middleware
//!
//! Maps domain errors onto HTTP status codes and JSON error responses so
//! every endpoint fails the same way. A lost reservation race surfaces as
//! `409 Conflict`; the caller may re-fetch slot state and try another slot.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shala_core::errors::ShalaError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `ShalaError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub ShalaError);

/// Converts application errors to HTTP responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ShalaError::NotFound(_) => StatusCode::NOT_FOUND,
            ShalaError::AlreadyBooked(_) => StatusCode::CONFLICT,
            ShalaError::Validation(_) => StatusCode::BAD_REQUEST,
            ShalaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShalaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using `?` with functions that return `Result<T, ShalaError>`
/// in handlers that return `Result<T, AppError>`.
impl From<ShalaError> for AppError {
    fn from(err: ShalaError) -> Self {
        AppError(err)
    }
}

/// Allows using `?` with functions that return `Result<T, eyre::Report>`;
/// the report is wrapped in `ShalaError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ShalaError::Database(err))
    }
}
