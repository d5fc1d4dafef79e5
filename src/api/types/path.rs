//! Path-segment extractor that reports rejections as field errors

use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::{FieldError, FieldLocation, ValidationError};

/// Wrapper around `axum::extract::Path` whose rejection is a 422
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(value)) => Ok(Path(value)),
            Err(rejection) => Err(ApiError::from(ValidationError::single(field_error(
                &rejection,
            )))),
        }
    }
}

fn field_error(rejection: &PathRejection) -> FieldError {
    let message = rejection.body_text();

    let PathRejection::FailedToDeserializePathParams(inner) = rejection else {
        return FieldError::whole(FieldLocation::Path, "path_parsing", message);
    };

    match inner.kind() {
        ErrorKind::InvalidUtf8InPathParam { key } => FieldError::new(
            FieldLocation::Path,
            key.as_str(),
            "string_unicode",
            "Input should be a valid string, unable to parse raw data as a unicode string",
        ),
        ErrorKind::ParseErrorAtKey { key, .. } | ErrorKind::DeserializeError { key, .. } => {
            FieldError::new(FieldLocation::Path, key.as_str(), "path_parsing", message)
        }
        _ => FieldError::whole(FieldLocation::Path, "path_parsing", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn echo(Path(note_id): Path<String>) -> String {
        note_id
    }

    async fn call(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/notes/{note_id}", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_segment_passed_through() {
        let (status, body) = call("/notes/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"abc");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unprocessable() {
        let (status, bytes) = call("/notes/%FF").await;
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], serde_json::json!(["path", "note_id"]));
        assert_eq!(body["detail"][0]["type"], "string_unicode");
    }
}
