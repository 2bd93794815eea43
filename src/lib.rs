pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use crate::db::AnalyticsStore;
use crate::services::analytics::AnalyticsService;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub analytics: AnalyticsService,
    pub config: config::AppConfig,
}

impl AppState {
    /// Wire the query service to an explicitly constructed storage handle.
    pub fn new(store: Arc<dyn AnalyticsStore>, config: config::AppConfig) -> Self {
        Self {
            analytics: AnalyticsService::new(store),
            config,
        }
    }
}
