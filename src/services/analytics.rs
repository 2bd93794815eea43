//! Selection policies for the dashboard endpoints.
//!
//! Two policies cover everything: "latest" picks the greatest ordering key
//! (KPI capture, signup month, device snapshot) and "most recent N" reads the
//! newest rows of a daily table and flips them into ascending order for charts.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::db::AnalyticsStore;
use crate::errors::AppError;
use crate::models::device_share::{DevicePoint, DeviceShareResponse};
use crate::models::kpi::{Kpi, KpiResponse};
use crate::models::range::RangeLimit;
use crate::models::revenue::RevenuePoint;
use crate::models::signup::{SignupMonth, SignupPoint, SignupResponse};
use crate::models::traffic::TrafficPoint;
use crate::services::format::{format_currency_compact, format_integer, format_percent};

/// Stateless query service over an injected storage handle.
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn AnalyticsStore>,
}

impl std::fmt::Debug for AnalyticsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsService").finish_non_exhaustive()
    }
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store }
    }

    /// Round-trip to the backing store.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await?;
        Ok(())
    }

    /// Headline KPIs from the latest snapshot, or an empty list when none exist.
    pub async fn get_kpis(&self) -> Result<KpiResponse, AppError> {
        let Some(snapshot) = self.store.latest_kpi_snapshot().await? else {
            tracing::debug!("No KPI snapshot available");
            return Ok(KpiResponse { kpis: Vec::new() });
        };

        tracing::debug!(captured_at = %snapshot.captured_at, "Loaded KPI snapshot");

        Ok(KpiResponse {
            kpis: vec![
                Kpi::flat("Total Users", format_integer(snapshot.total_users)),
                Kpi::flat("Sessions", format_integer(snapshot.sessions)),
                Kpi::flat("Conversion", format_percent(snapshot.conversion_pct)),
                Kpi::flat("Revenue", format_currency_compact(snapshot.revenue_cents)),
            ],
        })
    }

    /// The `limit` most recent traffic days, oldest first.
    pub async fn get_traffic(&self, limit: RangeLimit) -> Result<Vec<TrafficPoint>, AppError> {
        let mut rows = self.store.recent_traffic(limit.get()).await?;
        rows.reverse();
        tracing::debug!(limit = limit.get(), rows = rows.len(), "Loaded traffic");
        Ok(rows.into_iter().map(TrafficPoint::from).collect())
    }

    /// The `limit` most recent revenue days, oldest first, in major units.
    pub async fn get_revenue(&self, limit: RangeLimit) -> Result<Vec<RevenuePoint>, AppError> {
        let mut rows = self.store.recent_revenue(limit.get()).await?;
        rows.reverse();
        tracing::debug!(limit = limit.get(), rows = rows.len(), "Loaded revenue");
        Ok(rows.into_iter().map(RevenuePoint::from).collect())
    }

    /// Signups per channel for `period`, or for the latest month with data.
    pub async fn get_signups_by_channel(
        &self,
        period: Option<SignupMonth>,
    ) -> Result<SignupResponse, AppError> {
        let period = match period {
            Some(p) => Some(p),
            None => self.store.latest_signup_month().await?,
        };

        let Some(period) = period else {
            tracing::debug!("No signup data available");
            return Ok(SignupResponse {
                data: Vec::new(),
                year: None,
                month: None,
            });
        };

        let rows = self.store.signups_for_month(period).await?;
        tracing::debug!(
            year = period.year,
            month = period.month,
            rows = rows.len(),
            "Loaded signups by channel"
        );

        Ok(SignupResponse {
            data: rows.into_iter().map(SignupPoint::from).collect(),
            year: Some(period.year),
            month: Some(period.month),
        })
    }

    /// Device breakdown for snapshot `at`, or for the latest snapshot.
    pub async fn get_device_share(
        &self,
        at: Option<DateTime<Utc>>,
    ) -> Result<DeviceShareResponse, AppError> {
        let snapshot_at = match at {
            Some(ts) => Some(ts),
            None => self.store.latest_device_share_timestamp().await?,
        };

        let Some(snapshot_at) = snapshot_at else {
            tracing::debug!("No device share snapshot available");
            return Ok(DeviceShareResponse {
                data: Vec::new(),
                snapshot_at: None,
            });
        };

        let rows = self.store.device_share_rows_at(snapshot_at).await?;
        tracing::debug!(%snapshot_at, rows = rows.len(), "Loaded device share");

        Ok(DeviceShareResponse {
            data: rows.into_iter().map(DevicePoint::from).collect(),
            snapshot_at: Some(snapshot_at),
        })
    }
}
