//! Dashboard HTTP Server Binary
//!
//! This is the main entry point for the bike-sharing dashboard server.
//! It loads the dataset, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve ./day.csv on 0.0.0.0:8080
//! cargo run --bin bikeshare-server
//!
//! # Serve another file on another port
//! DASHBOARD_DATA=data/day.csv PORT=3000 cargo run --bin bikeshare-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a TOML config file (default: search for `dashboard.toml`)
//! - `DASHBOARD_DATA`: Dataset path (default: day.csv)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter directives, e.g. `debug` or `info,tower_http=debug` (default: info)

use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bikeshare_dashboard::config::DashboardConfig;
use bikeshare_dashboard::http::{create_router, AppState};
use bikeshare_dashboard::parsing::parse_usage_csv;

/// Filter built from `RUST_LOG` directives; `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting bike-sharing dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;
    let addr = config.bind_address()?;

    // The dataset is loaded once; a missing or malformed file aborts startup
    let dataset = parse_usage_csv(&config.data.path).with_context(|| {
        format!("Failed to load dataset from {}", config.data.path.display())
    })?;
    info!(
        records = dataset.len(),
        fingerprint = dataset.fingerprint(),
        "Dataset loaded"
    );

    let state = AppState::new(dataset, config);
    let app = create_router(state);

    info!("Dashboard available at http://{}/", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
