// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use crate::storage::StorageError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// Each variant maps to an HTTP status code and a JSON error response
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// Request body absent, unparseable, or not a JSON object
    #[error("Not a JSON")]
    NotAJson,

    /// Required field absent from the request body
    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Convert ApiError to HTTP response
/// Maps error variants to status codes and a structured JSON body
impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let error_code = match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::NotAJson => "NOT_A_JSON",
            ApiError::MissingField(_) => "MISSING_FIELD",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::Storage(_) => "STORAGE_ERROR",
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotAJson => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("State abc not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::NotAJson.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingField("name").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(ApiError::MissingField("user_id").to_string(), "Missing user_id");
        assert_eq!(ApiError::NotAJson.to_string(), "Not a JSON");
    }
}
