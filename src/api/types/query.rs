//! Query-string extractor that reports rejections as field errors

use axum::extract::{FromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::{FieldError, FieldLocation, ValidationError};

/// Wrapper around `axum::extract::Query` whose rejection is a 422
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => Err(ApiError::from(ValidationError::single(FieldError::whole(
                FieldLocation::Query,
                "query_parsing",
                rejection.body_text(),
            )))),
        }
    }
}
