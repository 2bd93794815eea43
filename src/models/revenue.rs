//! Daily revenue rows, stored in minor currency units.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `revenue_daily`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RevenueDay {
    pub day: NaiveDate,
    pub value_cents: i64,
}

/// Chart point for the revenue series. `value` is in major currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub day: NaiveDate,
    pub value: f64,
}

impl From<RevenueDay> for RevenuePoint {
    fn from(row: RevenueDay) -> Self {
        Self {
            day: row.day,
            value: row.value_cents as f64 / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_become_major_units() {
        let point = RevenuePoint::from(RevenueDay {
            day: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
            value_cents: 12_345,
        });
        assert_eq!(point.value, 123.45);
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            serde_json::json!({ "day": "2025-01-14", "value": 123.45 })
        );
    }
}
