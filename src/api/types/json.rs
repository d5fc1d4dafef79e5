//! Custom JSON extractor that reports rejections as field errors

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::{FieldError, FieldLocation, ValidationError};

/// Custom JSON extractor that converts all rejection errors to JSON format
///
/// Malformed bodies are unprocessable input, so they surface as 422 with a
/// `["body"]` location rather than axum's plain-text 400/415.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(rejection_to_error(&rejection)),
        }
    }
}

fn rejection_to_error(rejection: &axum::extract::rejection::JsonRejection) -> ApiError {
    use axum::extract::rejection::JsonRejection::*;

    let (kind, message) = match rejection {
        JsonDataError(err) => ("model_attributes_type", err.body_text()),
        JsonSyntaxError(err) => ("json_invalid", format!("JSON decode error: {}", err.body_text())),
        MissingJsonContentType(_) => (
            "model_attributes_type",
            "Missing Content-Type header. Expected 'application/json'.".to_string(),
        ),
        BytesRejection(err) => {
            return ApiError::new(
                rejection.status(),
                format!("Failed to read request body: {}", err.body_text()),
            );
        }
        _ => {
            return ApiError::new(StatusCode::BAD_REQUEST, "Invalid JSON request");
        }
    };

    ApiError::from(ValidationError::single(FieldError::whole(
        FieldLocation::Body,
        kind,
        message,
    )))
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}
