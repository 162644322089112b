use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use sunward_core::ValidationError;
use sunward_storage::StorageError;

/// Main application error type that all handlers return
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<ValidationError>),

    #[error("Unknown product category: {0}")]
    UnknownCategory(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Storage error")]
    Storage(#[from] StorageError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Structured error response format for API consistency
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
    request_id: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<ValidationError>>,
}

impl AppError {
    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            AppError::UnknownCategory(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_CATEGORY"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                format!("Validation failed for: {}", fields.join(", "))
            }
            AppError::UnknownCategory(raw) => format!("Unknown product category: {}", raw),
            AppError::NotFound(resource) => format!("{} not found", resource),
            // Downstream failure details stay in the logs
            AppError::Storage(_) => "Data storage error".to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();
        let message = self.to_user_message();

        match &self {
            AppError::Storage(err) => {
                error!(
                    request_id = %request_id,
                    error = %err,
                    "Storage error while handling request"
                );
            }
            AppError::Internal(err) => {
                error!(
                    request_id = %request_id,
                    error = %err,
                    "Internal server error occurred"
                );
            }
            _ => {
                tracing::info!(
                    request_id = %request_id,
                    error_code = %error_code,
                    error = %self,
                    "API error response"
                );
            }
        }

        let fields = match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: error_code,
                message,
                fields,
            },
            request_id,
        };

        let mut response = Json(body).into_response();
        *response.status_mut() = status_code;
        response
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_422() {
        let error = AppError::Validation(vec![ValidationError::new("email", "bad")]);
        let (status, code) = error.to_status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_unknown_category_maps_to_400() {
        let error = AppError::UnknownCategory("widgets".to_string());
        let (status, code) = error.to_status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "UNKNOWN_CATEGORY");
        assert!(error.to_user_message().contains("widgets"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError::NotFound("Product");
        let (status, _) = error.to_status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.to_user_message(), "Product not found");
    }

    #[test]
    fn test_storage_error_message_is_sanitized() {
        let error = AppError::Internal(anyhow::anyhow!("connection string with secrets"));
        assert_eq!(error.to_user_message(), "An internal server error occurred");
    }
}
