// src/api/error.rs
// Centralized error-to-response mapping for the HTTP facade.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { message: message.into(), status_code: StatusCode::BAD_REQUEST }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { message: message.into(), status_code: StatusCode::NOT_FOUND }
    }

    /// Create a new internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self { message: message.into(), status_code: StatusCode::INTERNAL_SERVER_ERROR }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "error": self.message }))).into_response()
    }
}
