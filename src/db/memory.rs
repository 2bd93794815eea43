//! In-memory `AnalyticsStore` with the same selection and ordering rules as
//! the Postgres store. Used by tests and for running the API without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::AnalyticsStore;
use crate::models::device_share::DeviceShareRow;
use crate::models::kpi::KpiSnapshot;
use crate::models::revenue::RevenueDay;
use crate::models::signup::{SignupMonth, SignupRow};
use crate::models::traffic::TrafficDay;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    kpis: Vec<KpiSnapshot>,
    traffic: Vec<TrafficDay>,
    revenue: Vec<RevenueDay>,
    signups: Vec<SignupRow>,
    device_share: Vec<DeviceShareRow>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if the pool had been shut down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_kpis(mut self, rows: impl IntoIterator<Item = KpiSnapshot>) -> Self {
        self.kpis.extend(rows);
        self
    }

    pub fn with_traffic(mut self, rows: impl IntoIterator<Item = TrafficDay>) -> Self {
        self.traffic.extend(rows);
        self
    }

    pub fn with_revenue(mut self, rows: impl IntoIterator<Item = RevenueDay>) -> Self {
        self.revenue.extend(rows);
        self
    }

    pub fn with_signups(mut self, rows: impl IntoIterator<Item = SignupRow>) -> Self {
        self.signups.extend(rows);
        self
    }

    pub fn with_device_share(mut self, rows: impl IntoIterator<Item = DeviceShareRow>) -> Self {
        self.device_share.extend(rows);
        self
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.unavailable {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

/// Newest-first copy of `rows`, truncated to `limit`.
fn most_recent<T: Clone, K: Ord>(rows: &[T], limit: i64, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted.truncate(usize::try_from(limit).unwrap_or(0));
    sorted
}

#[async_trait]
impl AnalyticsStore for MemoryStore {
    async fn latest_kpi_snapshot(&self) -> Result<Option<KpiSnapshot>, sqlx::Error> {
        self.check()?;
        Ok(self.kpis.iter().max_by_key(|k| k.captured_at).cloned())
    }

    async fn recent_traffic(&self, limit: i64) -> Result<Vec<TrafficDay>, sqlx::Error> {
        self.check()?;
        Ok(most_recent(&self.traffic, limit, |r| r.day))
    }

    async fn recent_revenue(&self, limit: i64) -> Result<Vec<RevenueDay>, sqlx::Error> {
        self.check()?;
        Ok(most_recent(&self.revenue, limit, |r| r.day))
    }

    async fn latest_signup_month(&self) -> Result<Option<SignupMonth>, sqlx::Error> {
        self.check()?;
        Ok(self
            .signups
            .iter()
            .map(|r| SignupMonth {
                year: r.year,
                month: r.month,
            })
            .max())
    }

    async fn signups_for_month(&self, period: SignupMonth) -> Result<Vec<SignupRow>, sqlx::Error> {
        self.check()?;
        let mut rows: Vec<SignupRow> = self
            .signups
            .iter()
            .filter(|r| r.year == period.year && r.month == period.month)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.channel.cmp(&b.channel));
        Ok(rows)
    }

    async fn latest_device_share_timestamp(&self) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
        self.check()?;
        Ok(self.device_share.iter().map(|r| r.snapshot_at).max())
    }

    async fn device_share_rows_at(
        &self,
        snapshot_at: DateTime<Utc>,
    ) -> Result<Vec<DeviceShareRow>, sqlx::Error> {
        self.check()?;
        let mut rows: Vec<DeviceShareRow> = self
            .device_share
            .iter()
            .filter(|r| r.snapshot_at == snapshot_at)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.device.cmp(&b.device));
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check()
    }
}
