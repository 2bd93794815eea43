//! `AnalyticsStore` backed by PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::AnalyticsStore;
use crate::models::device_share::DeviceShareRow;
use crate::models::kpi::KpiSnapshot;
use crate::models::revenue::RevenueDay;
use crate::models::signup::{SignupMonth, SignupRow};
use crate::models::traffic::TrafficDay;

/// Postgres storage handle. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgAnalyticsStore {
    pool: PgPool,
}

impl PgAnalyticsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsStore for PgAnalyticsStore {
    async fn latest_kpi_snapshot(&self) -> Result<Option<KpiSnapshot>, sqlx::Error> {
        sqlx::query_as::<_, KpiSnapshot>(
            r#"
            SELECT captured_at, total_users, sessions, conversion_pct, revenue_cents
            FROM kpi_snapshots
            ORDER BY captured_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
    }

    async fn recent_traffic(&self, limit: i64) -> Result<Vec<TrafficDay>, sqlx::Error> {
        sqlx::query_as::<_, TrafficDay>(
            r#"
            SELECT day, visits, sessions
            FROM traffic_daily
            ORDER BY day DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn recent_revenue(&self, limit: i64) -> Result<Vec<RevenueDay>, sqlx::Error> {
        sqlx::query_as::<_, RevenueDay>(
            r#"
            SELECT day, value_cents
            FROM revenue_daily
            ORDER BY day DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn latest_signup_month(&self) -> Result<Option<SignupMonth>, sqlx::Error> {
        sqlx::query_as::<_, SignupMonth>(
            r#"
            SELECT year, month
            FROM signups_by_channel
            ORDER BY year DESC, month DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
    }

    async fn signups_for_month(&self, period: SignupMonth) -> Result<Vec<SignupRow>, sqlx::Error> {
        // COLLATE "C" keeps channel order byte-wise regardless of database locale.
        sqlx::query_as::<_, SignupRow>(
            r#"
            SELECT year, month, channel, signups
            FROM signups_by_channel
            WHERE year = $1 AND month = $2
            ORDER BY channel COLLATE "C" ASC
            "#,
        )
        .bind(period.year)
        .bind(period.month)
        .fetch_all(&self.pool)
        .await
    }

    async fn latest_device_share_timestamp(&self) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<DateTime<Utc>>>("SELECT MAX(snapshot_at) FROM device_share")
            .fetch_one(&self.pool)
            .await
    }

    async fn device_share_rows_at(
        &self,
        snapshot_at: DateTime<Utc>,
    ) -> Result<Vec<DeviceShareRow>, sqlx::Error> {
        sqlx::query_as::<_, DeviceShareRow>(
            r#"
            SELECT snapshot_at, device, share_pct, os
            FROM device_share
            WHERE snapshot_at = $1
            ORDER BY device COLLATE "C" ASC
            "#,
        )
        .bind(snapshot_at)
        .fetch_all(&self.pool)
        .await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
