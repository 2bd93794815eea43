//! KPI snapshot rows and the formatted KPI list returned to the dashboard header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One point-in-time capture of top-line metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct KpiSnapshot {
    pub captured_at: DateTime<Utc>,
    pub total_users: i64,
    pub sessions: i64,
    pub conversion_pct: f64,
    pub revenue_cents: i64,
}

/// A single labelled KPI with its display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub delta: f64,
}

impl Kpi {
    /// Build a KPI with no trend data.
    pub fn flat(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
            delta: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiResponse {
    pub kpis: Vec<Kpi>,
}
