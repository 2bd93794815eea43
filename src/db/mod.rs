//! Database connection pool and the storage-access contract for the analytics tables.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::models::device_share::DeviceShareRow;
use crate::models::kpi::KpiSnapshot;
use crate::models::revenue::RevenueDay;
use crate::models::signup::{SignupMonth, SignupRow};
use crate::models::traffic::TrafficDay;

pub use memory::MemoryStore;
pub use postgres::PgAnalyticsStore;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Read-only access to the five analytics tables.
///
/// Absent data is never an error: "latest" lookups return `None` and range
/// lookups return an empty vector.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Row with the greatest capture timestamp.
    async fn latest_kpi_snapshot(&self) -> Result<Option<KpiSnapshot>, sqlx::Error>;

    /// Up to `limit` rows, most recent day first.
    async fn recent_traffic(&self, limit: i64) -> Result<Vec<TrafficDay>, sqlx::Error>;

    /// Up to `limit` rows, most recent day first.
    async fn recent_revenue(&self, limit: i64) -> Result<Vec<RevenueDay>, sqlx::Error>;

    /// Greatest `(year, month)` pair with any signup rows.
    async fn latest_signup_month(&self) -> Result<Option<SignupMonth>, sqlx::Error>;

    /// All channel rows for `period`, ordered by channel ascending.
    async fn signups_for_month(&self, period: SignupMonth) -> Result<Vec<SignupRow>, sqlx::Error>;

    async fn latest_device_share_timestamp(&self) -> Result<Option<DateTime<Utc>>, sqlx::Error>;

    /// All device rows captured at `snapshot_at`, ordered by device ascending.
    async fn device_share_rows_at(
        &self,
        snapshot_at: DateTime<Utc>,
    ) -> Result<Vec<DeviceShareRow>, sqlx::Error>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
