//! API error types.
//!
//! Every rejected receipt collapses to the same fixed client message no
//! matter which check failed; the typed [`tally_core::ValidationError`]
//! detail stays in the server logs. Unknown identifiers get their own
//! fixed not-found message. Nothing else can go wrong: scoring a validated
//! receipt is infallible, so there is no internal-error variant for the
//! happy path to leak.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use tally_core::ValidationError;

/// Fixed client-facing message for any rejected receipt.
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid";

/// Fixed client-facing message for an unknown identifier.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id";

/// API error types.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body, missing field, failed grammar, or empty items -
    /// all indistinguishable to the client.
    #[error("invalid receipt")]
    InvalidReceipt,

    /// Identifier was never issued by this process.
    #[error("no receipt found for that id")]
    NotFound,
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ValidationError> for ApiError {
    fn from(_: ValidationError) -> Self {
        ApiError::InvalidReceipt
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidReceipt => (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE),
            ApiError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;
