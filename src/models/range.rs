//! Bounded row-count parameter shared by the time-series endpoints.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

const LIMIT_MESSAGE: &str = "limit must be between 1 and 60";

/// Raw `?limit=` query parameter, kept as text so malformed values surface as
/// validation errors rather than decoder rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

/// Number of most-recent rows to return, guaranteed to lie in `1..=60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct RangeLimit {
    #[validate(range(min = 1, max = 60, message = "limit must be between 1 and 60"))]
    value: i64,
}

impl RangeLimit {
    /// Smallest accepted limit.
    pub const MIN: i64 = 1;

    /// Largest accepted limit.
    pub const MAX: i64 = 60;

    /// Limit used when the parameter is omitted.
    pub const DEFAULT: i64 = 10;

    pub fn new(value: i64) -> Result<Self, AppError> {
        let limit = Self { value };
        limit
            .validate()
            .map_err(|e| AppError::Validation(first_message(&e, &["value"], LIMIT_MESSAGE)))?;
        Ok(limit)
    }

    pub fn get(self) -> i64 {
        self.value
    }
}

impl Default for RangeLimit {
    fn default() -> Self {
        Self {
            value: Self::DEFAULT,
        }
    }
}

impl TryFrom<LimitParams> for RangeLimit {
    type Error = AppError;

    fn try_from(params: LimitParams) -> Result<Self, Self::Error> {
        match params.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => {
                let value = raw
                    .parse::<i64>()
                    .map_err(|_| AppError::Validation(LIMIT_MESSAGE.to_string()))?;
                Self::new(value)
            }
        }
    }
}

/// Extracts the limit straight from the query string. Any query that cannot be
/// decoded (a repeated `limit`, bad percent-encoding) is reported with the same
/// message as an out-of-range value.
impl<S> FromRequestParts<S> for RangeLimit
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<LimitParams>::try_from_uri(&parts.uri)
            .map_err(|_| AppError::Validation(LIMIT_MESSAGE.to_string()))?;
        Self::try_from(params)
    }
}

/// First message among the failures on `fields`, checked in the given order.
pub(crate) fn first_message(errors: &ValidationErrors, fields: &[&str], fallback: &str) -> String {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| fallback.to_string())
}
