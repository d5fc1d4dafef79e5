//! API error types
//!
//! All failures are rendered as `{"detail": ...}`. Validation failures carry
//! one entry per violated field; everything else carries a short message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{DomainError, FieldError, ValidationError};

/// One violated field in a 422 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorBody {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(err: &FieldError) -> Self {
        Self {
            loc: err.loc(),
            msg: err.message().to_string(),
            error_type: err.kind().to_string(),
        }
    }
}

/// Payload of the `detail` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldErrorBody>),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub detail: ErrorDetail,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error with a plain message
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                detail: ErrorDetail::Message(message.into()),
            },
        }
    }

    /// Unprocessable entity with one entry per violated field
    pub fn validation(report: &ValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            response: ApiErrorResponse {
                detail: ErrorDetail::Fields(
                    report.errors().iter().map(FieldErrorBody::from).collect(),
                ),
            },
        }
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(&err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message.clone()),
            DomainError::Unavailable { .. } | DomainError::Storage { .. } => {
                error!(error = %err, "Storage operation failed");
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.response.detail {
            ErrorDetail::Message(message) => write!(f, "{}: {}", self.status, message),
            ErrorDetail::Fields(fields) => {
                write!(f, "{}: {} invalid field(s)", self.status, fields.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldLocation;

    #[test]
    fn test_not_found_conversion() {
        let api_err: ApiError = DomainError::not_found("Note not found").into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&api_err.response).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "Note not found"}));
    }

    #[test]
    fn test_storage_errors_hide_cause() {
        let api_err: ApiError =
            DomainError::storage("relation \"notes\" does not exist").into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_err.response.detail,
            ErrorDetail::Message("Internal server error".to_string())
        );

        let api_err: ApiError = DomainError::unavailable("connection refused").into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api_err.to_string().contains("refused"));
    }

    #[test]
    fn test_validation_serialization() {
        let report = ValidationError::new(vec![
            FieldError::new(
                FieldLocation::Query,
                "limit",
                "less_than_equal",
                "Input should be less than or equal to 100",
            ),
            FieldError::whole(FieldLocation::Body, "json_invalid", "JSON decode error"),
        ]);
        let api_err = ApiError::from(report);

        assert_eq!(api_err.status, StatusCode::UNPROCESSABLE_ENTITY);
        let json = serde_json::to_value(&api_err.response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "detail": [
                    {
                        "loc": ["query", "limit"],
                        "msg": "Input should be less than or equal to 100",
                        "type": "less_than_equal"
                    },
                    {
                        "loc": ["body"],
                        "msg": "JSON decode error",
                        "type": "json_invalid"
                    }
                ]
            })
        );
    }
}
