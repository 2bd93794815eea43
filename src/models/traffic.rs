//! Daily traffic rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `traffic_daily`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TrafficDay {
    pub day: NaiveDate,
    pub visits: i64,
    pub sessions: i64,
}

/// Chart point for the traffic series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub day: NaiveDate,
    pub visits: i64,
    pub sessions: i64,
}

impl From<TrafficDay> for TrafficPoint {
    fn from(row: TrafficDay) -> Self {
        Self {
            day: row.day,
            visits: row.visits,
            sessions: row.sessions,
        }
    }
}
