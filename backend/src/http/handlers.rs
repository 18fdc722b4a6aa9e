//! HTTP handlers for the dashboard and its JSON API.
//!
//! Each handler recomputes what it serves from the shared dataset; nothing
//! is cached between requests. CPU-bound aggregation and rendering run on
//! the blocking thread pool.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};

use super::dto::{ChartKind, HealthResponse, MonthlyQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BinnedCategory, DashboardData, MonthlySeries, SummaryData, YearlyTotals};
use crate::error::DashboardResult;
use crate::render;
use crate::routes::monthly::{DEFAULT_MONTH_WINDOW, MAX_MONTH_WINDOW};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run a CPU-bound dashboard computation off the async runtime.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> DashboardResult<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;
    Ok(result?)
}

// =============================================================================
// Dashboard Page
// =============================================================================

/// GET /
///
/// Render the full dashboard page. One complete aggregation + render pass
/// per request.
pub async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = run_blocking(move || {
        let data = services::compute_dashboard(
            &state.dataset,
            state.dataset_name(),
            DEFAULT_MONTH_WINDOW,
        )?;
        render::render_dashboard_page(&data, &state.config.sidebar)
    })
    .await?;

    Ok(Html(html))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Report that the service is up and which dataset snapshot it serves.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: services::dataset_summary(&state.dataset, state.dataset_name()),
    }))
}

// =============================================================================
// JSON Endpoints
// =============================================================================

/// GET /v1/summary
///
/// Grand totals and the casual-vs-registered bars.
pub async fn get_summary(State(state): State<AppState>) -> HandlerResult<SummaryData> {
    let summary = run_blocking(move || services::compute_summary(state.dataset.records())).await?;
    Ok(Json(summary))
}

/// GET /v1/yearly
///
/// Casual and registered sums per calendar year.
pub async fn get_yearly(State(state): State<AppState>) -> HandlerResult<Vec<YearlyTotals>> {
    let yearly =
        run_blocking(move || services::compute_yearly_totals(state.dataset.records())).await?;
    Ok(Json(yearly))
}

/// GET /v1/monthly?months=N
///
/// The last `N` calendar months (default 10).
pub async fn get_monthly(
    State(state): State<AppState>,
    Query(query): Query<MonthlyQuery>,
) -> HandlerResult<MonthlySeries> {
    let window = query.months.unwrap_or(DEFAULT_MONTH_WINDOW);
    if window == 0 || window > MAX_MONTH_WINDOW {
        return Err(AppError::BadRequest(format!(
            "months must be between 1 and {}, got {}",
            MAX_MONTH_WINDOW, window
        )));
    }

    let series =
        run_blocking(move || services::last_n_months(state.dataset.records(), window)).await?;
    Ok(Json(series))
}

/// GET /v1/bins
///
/// Binned temperature, humidity and wind speed counts.
pub async fn get_bins(State(state): State<AppState>) -> HandlerResult<Vec<BinnedCategory>> {
    let bins = run_blocking(move || Ok(services::bin_all(state.dataset.records()))).await?;
    Ok(Json(bins))
}

/// GET /v1/dashboard
///
/// Every aggregate the page shows, as one JSON document.
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardData> {
    let data = run_blocking(move || {
        services::compute_dashboard(&state.dataset, state.dataset_name(), DEFAULT_MONTH_WINDOW)
    })
    .await?;

    Ok(Json(data))
}

/// GET /v1/charts/{chart}
///
/// A single chart as an SVG document.
pub async fn get_chart(
    State(state): State<AppState>,
    Path(chart): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind: ChartKind = chart.parse().map_err(AppError::NotFound)?;

    let svg = run_blocking(move || {
        let records = state.dataset.records();
        match kind {
            ChartKind::Usage => {
                render::render_usage_chart(&services::compute_summary(records)?.shares)
            }
            ChartKind::Monthly => render::render_monthly_chart(
                &services::last_n_months(records, DEFAULT_MONTH_WINDOW)?.months,
            ),
            ChartKind::Bins => render::render_bins_chart(&services::bin_all(records)),
        }
    })
    .await?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
