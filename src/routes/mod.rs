//! Route definitions for the analytics API.

pub mod analytics;
pub mod health;

use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, middleware, routing::get, BoxError, Router};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::compression::CompressionLayer;

use crate::errors::AppError;
use crate::middleware::request_id::request_context;
use crate::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let timeout = state.config.request_timeout();
    let layers = ServiceBuilder::new()
        .layer(middleware::from_fn(request_context))
        .layer(CompressionLayer::new())
        .layer(HandleErrorLayer::new(move |err: BoxError| async move {
            middleware_error(timeout, err)
        }))
        .layer(TimeoutLayer::new(timeout));

    let analytics_routes = Router::new()
        .route("/kpis", get(analytics::kpis))
        .route("/traffic", get(analytics::traffic))
        .route("/signups", get(analytics::signups))
        .route("/revenue", get(analytics::revenue))
        .route("/device-share", get(analytics::device_share));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .nest("/analytics", analytics_routes)
        .layer(layers)
        .with_state(state)
}

/// Failures raised by the layer stack itself rather than by a handler.
fn middleware_error(timeout: Duration, err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Internal(format!("request timed out after {}s", timeout.as_secs()))
    } else {
        AppError::Internal(format!("unhandled middleware error: {err}"))
    }
}
