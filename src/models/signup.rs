//! Monthly signups broken down by acquisition channel.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::errors::AppError;
use crate::models::range::first_message;

/// One row of `signups_by_channel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SignupRow {
    pub year: i32,
    pub month: i32,
    pub channel: String,
    pub signups: i64,
}

/// A calendar month. Ordering is by year, then month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, FromRow, Validate,
)]
pub struct SignupMonth {
    #[validate(range(min = 1, max = 9999, message = "year must be between 1 and 9999"))]
    pub year: i32,
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: i32,
}

impl SignupMonth {
    pub fn new(year: i32, month: i32) -> Result<Self, AppError> {
        let period = Self { year, month };
        period.validate().map_err(|e| {
            AppError::Validation(first_message(&e, &["month", "year"], "invalid month"))
        })?;
        Ok(period)
    }
}

/// Optional `?year=&month=` selector; both or neither must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupPeriodParams {
    pub year: Option<String>,
    pub month: Option<String>,
}

impl SignupPeriodParams {
    /// Resolve the explicit period, if one was requested.
    pub fn period(&self) -> Result<Option<SignupMonth>, AppError> {
        let year = self.year.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let month = self.month.as_deref().map(str::trim).filter(|s| !s.is_empty());

        match (year, month) {
            (None, None) => Ok(None),
            (Some(year), Some(month)) => {
                let year = year
                    .parse::<i32>()
                    .map_err(|_| AppError::Validation("year must be between 1 and 9999".into()))?;
                let month = month
                    .parse::<i32>()
                    .map_err(|_| AppError::Validation("month must be between 1 and 12".into()))?;
                SignupMonth::new(year, month).map(Some)
            }
            _ => Err(AppError::Validation(
                "year and month must be provided together".into(),
            )),
        }
    }
}

/// Chart point for the signups bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPoint {
    pub channel: String,
    pub signups: i64,
}

impl From<SignupRow> for SignupPoint {
    fn from(row: SignupRow) -> Self {
        Self {
            channel: row.channel,
            signups: row.signups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub data: Vec<SignupPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(year: Option<&str>, month: Option<&str>) -> SignupPeriodParams {
        SignupPeriodParams {
            year: year.map(str::to_string),
            month: month.map(str::to_string),
        }
    }

    #[test]
    fn months_order_by_year_then_month() {
        let aug = SignupMonth::new(2025, 8).unwrap();
        let sep = SignupMonth::new(2025, 9).unwrap();
        let jan_next = SignupMonth::new(2026, 1).unwrap();
        assert!(aug < sep);
        assert!(sep < jan_next);
    }

    #[test]
    fn no_selector_means_latest() {
        assert_eq!(params(None, None).period().unwrap(), None);
        assert_eq!(params(Some(""), Some(" ")).period().unwrap(), None);
    }

    #[test]
    fn explicit_period() {
        let period = params(Some("2025"), Some("9")).period().unwrap();
        assert_eq!(period, Some(SignupMonth { year: 2025, month: 9 }));
    }

    #[test]
    fn half_selector_is_rejected() {
        let err = params(Some("2025"), None).period().unwrap_err();
        assert_eq!(err.to_string(), "year and month must be provided together");
    }

    #[test]
    fn month_out_of_range() {
        let err = params(Some("2025"), Some("13")).period().unwrap_err();
        assert_eq!(err.to_string(), "month must be between 1 and 12");
        let err = params(Some("2025"), Some("sep")).period().unwrap_err();
        assert_eq!(err.to_string(), "month must be between 1 and 12");
    }

    #[test]
    fn month_error_reported_before_year_error() {
        for _ in 0..10 {
            let err = SignupMonth::new(0, 13).unwrap_err();
            assert_eq!(err.to_string(), "month must be between 1 and 12");
        }
        let err = SignupMonth::new(0, 6).unwrap_err();
        assert_eq!(err.to_string(), "year must be between 1 and 9999");
    }

    #[test]
    fn response_omits_missing_period() {
        let body = SignupResponse {
            data: vec![],
            year: None,
            month: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "data": [] })
        );
    }
}
