//! Analytics routes: read-only aggregates for the dashboard widgets.

use axum::{extract::State, Json};

use crate::errors::{AppError, DataResponse};
use crate::middleware::query::ApiQuery;
use crate::models::device_share::{DeviceShareResponse, SnapshotParams};
use crate::models::kpi::KpiResponse;
use crate::models::range::RangeLimit;
use crate::models::revenue::RevenuePoint;
use crate::models::signup::{SignupPeriodParams, SignupResponse};
use crate::models::traffic::TrafficPoint;
use crate::AppState;

/// GET /analytics/kpis — headline KPIs from the latest snapshot.
pub async fn kpis(State(state): State<AppState>) -> Result<Json<KpiResponse>, AppError> {
    let kpis = state.analytics.get_kpis().await?;
    Ok(Json(kpis))
}

/// GET /analytics/traffic?limit=10 — recent daily traffic, oldest first.
pub async fn traffic(
    State(state): State<AppState>,
    limit: RangeLimit,
) -> Result<Json<DataResponse<Vec<TrafficPoint>>>, AppError> {
    let points = state.analytics.get_traffic(limit).await?;
    Ok(DataResponse::success(points))
}

/// GET /analytics/signups — signups per channel for the latest (or requested) month.
pub async fn signups(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SignupPeriodParams>,
) -> Result<Json<SignupResponse>, AppError> {
    let period = params.period()?;
    let signups = state.analytics.get_signups_by_channel(period).await?;
    Ok(Json(signups))
}

/// GET /analytics/revenue?limit=10 — recent daily revenue, oldest first.
pub async fn revenue(
    State(state): State<AppState>,
    limit: RangeLimit,
) -> Result<Json<DataResponse<Vec<RevenuePoint>>>, AppError> {
    let points = state.analytics.get_revenue(limit).await?;
    Ok(DataResponse::success(points))
}

/// GET /analytics/device-share — device breakdown for the latest (or requested) snapshot.
pub async fn device_share(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SnapshotParams>,
) -> Result<Json<DeviceShareResponse>, AppError> {
    let at = params.snapshot()?;
    let share = state.analytics.get_device_share(at).await?;
    Ok(Json(share))
}
