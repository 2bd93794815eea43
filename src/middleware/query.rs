//! Query-string extractor whose rejection uses the API error body.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like [`axum::extract::Query`], but undecodable query strings are reported
/// as `400 {"error": ...}` instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        limit: Option<String>,
    }

    async fn extract(uri: &str) -> Result<ApiQuery<Params>, AppError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ApiQuery::<Params>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn decodes_present_and_missing_params() {
        let ApiQuery(params) = extract("/analytics/traffic?limit=5").await.unwrap();
        assert_eq!(params.limit.as_deref(), Some("5"));
        let ApiQuery(params) = extract("/analytics/traffic").await.unwrap();
        assert!(params.limit.is_none());
    }

    #[tokio::test]
    async fn duplicate_keys_are_a_validation_error() {
        let err = extract("/analytics/traffic?limit=5&limit=6").await.unwrap_err();
        assert!(err.is_client_error());
    }
}
