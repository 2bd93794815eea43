//! Device share snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// One row of `device_share`. All rows with the same `snapshot_at` form a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DeviceShareRow {
    pub snapshot_at: DateTime<Utc>,
    pub device: String,
    pub share_pct: f64,
    pub os: Option<String>,
}

/// Pie slice for the device share chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePoint {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

impl From<DeviceShareRow> for DevicePoint {
    fn from(row: DeviceShareRow) -> Self {
        Self {
            name: row.device,
            value: row.share_pct,
            os: row.os,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceShareResponse {
    pub data: Vec<DevicePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_at: Option<DateTime<Utc>>,
}

/// Optional `?at=` selector naming a specific snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotParams {
    pub at: Option<String>,
}

impl SnapshotParams {
    pub fn snapshot(&self) -> Result<Option<DateTime<Utc>>, AppError> {
        match self.at.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|ts| Some(ts.with_timezone(&Utc)))
                .map_err(|_| AppError::Validation("at must be an RFC 3339 timestamp".into())),
        }
    }
}
