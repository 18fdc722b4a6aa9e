//! Router configuration for the dashboard server.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{bins, dashboard, monthly, summary};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only API, any origin may fetch it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/health", get(handlers::health_check))
        .route(summary::GET_SUMMARY, get(handlers::get_summary))
        .route(summary::GET_YEARLY, get(handlers::get_yearly))
        .route(monthly::GET_MONTHLY, get(handlers::get_monthly))
        .route(bins::GET_BINS, get(handlers::get_bins))
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(dashboard::GET_CHART, get(handlers::get_chart))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
