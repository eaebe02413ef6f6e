// src/api/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

use crate::calculator::CalcError;

/// Error response rendered as `{"error": message}`
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Create a new internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::NOT_FOUND, message)
    }

    /// Create a new unprocessable entity error
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::custom(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn custom(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        if err.is_client_error() {
            warn!(category = err.category().as_str(), "{}", err);
            ApiError::bad_request(err.to_string())
        } else {
            error!(category = err.category().as_str(), "Calculation failed: {}", err);
            ApiError::internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let error = ApiError::internal("Test error");
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "Test error");
        assert_eq!(error.to_string(), "Test error");
    }

    #[test]
    fn test_calc_error_status_mapping() {
        let cases = [
            (CalcError::MissingOperand("add".into()), StatusCode::BAD_REQUEST),
            (CalcError::DivisionByZero, StatusCode::BAD_REQUEST),
            (CalcError::ModuloByZero, StatusCode::BAD_REQUEST),
            (CalcError::NegativeSqrt, StatusCode::BAD_REQUEST),
            (CalcError::UnknownOperator("xyz".into()), StatusCode::BAD_REQUEST),
            (CalcError::Internal("overflow".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let message = err.to_string();
            let api: ApiError = err.into();
            assert_eq!(api.status_code, status);
            assert_eq!(api.message, message);
        }
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found("missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
