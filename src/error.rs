//! HTTP-facing error type and its JSON rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload nested under the `error` key of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by HTTP handlers.
///
/// # Response Codes
///
/// - [`AppError::Validation`] - 400 `validation_error`
/// - [`AppError::NotFound`] - 404 `not_found`
/// - [`AppError::Unavailable`] - 503 `service_unavailable`
/// - [`AppError::Internal`] - 500 `internal_error`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Unavailable { message, details } => {
                ("service_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmptyInput => {
                AppError::bad_request("URL must not be empty", json!({ "field": "url" }))
            }
            StoreError::KeyGenerationExhausted { attempts } => AppError::unavailable(
                "Failed to generate unique code, please retry",
                json!({ "attempts": attempts }),
            ),
            StoreError::NotFound { key } => {
                AppError::not_found("Short link not found", json!({ "code": key }))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let fields: Value = e
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect::<serde_json::Map<String, Value>>()
            .into();

        AppError::bad_request("Request validation failed", json!({ "fields": fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_maps_to_bad_request() {
        let err = AppError::from(StoreError::EmptyInput);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().code, "validation_error");
    }

    #[test]
    fn test_exhausted_maps_to_service_unavailable() {
        let err = AppError::from(StoreError::KeyGenerationExhausted { attempts: 10 });

        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        let info = err.to_error_info();
        assert_eq!(info.code, "service_unavailable");
        assert_eq!(info.details["attempts"], 10);
    }

    #[test]
    fn test_not_found_carries_code() {
        let err = AppError::from(StoreError::NotFound {
            key: "zzzzzz".to_string(),
        });

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_info().details["code"], "zzzzzz");
        assert_eq!(err.to_string(), "Short link not found");
    }

    #[test]
    fn test_internal_status() {
        let err = AppError::internal("boom", json!({}));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
