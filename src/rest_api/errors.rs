//! # REST API Errors
//!
//! Error types for the REST surface. Every error knows its HTTP status
//! and serializes as `{error, code}`; handlers return `Result<_, ApiError>`
//! and axum renders whatever falls through.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::{MalformedId, ValidationError};
use crate::store::StoreError;

/// Result type for REST handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id does not meet the identifier format
    #[error("malformed user id: {0:?}")]
    MalformedId(String),

    /// Request body could not be parsed
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Payload violated a field constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Payload violated the email uniqueness constraint
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    /// Well-formed id, no matching record
    #[error("user not found")]
    NotFound,

    /// No route matched the request
    #[error("route not found")]
    RouteNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything the handler could not classify
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::MalformedId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MalformedId> for ApiError {
    fn from(err: MalformedId) -> Self {
        ApiError::MalformedId(err.0)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::DuplicateEmail(email) => ApiError::DuplicateEmail(email),
            StoreError::Validation(v) => ApiError::Validation(v),
            StoreError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
