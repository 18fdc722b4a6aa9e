//! # Bike-Sharing Usage Dashboard
//!
//! Single-page dashboard over the daily bike-sharing usage dataset.
//!
//! The crate loads `day.csv` once, computes descriptive aggregates on every
//! request and renders them as an HTML page with server-side SVG charts. The
//! same aggregates are available as JSON through an Axum REST API.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the daily CSV, sort chronologically, fingerprint
//! - **Aggregation**: Grand totals, calendar-month resampling, equal-width binning
//! - **Presentation**: Metric row, bar and line charts rendered with plotters
//! - **HTTP API**: Dashboard page, JSON endpoints and per-chart SVG
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Usage records and the immutable dataset
//! - [`parsing`]: CSV loader
//! - [`services`]: Aggregation computations
//! - [`render`]: Charts and the HTML page
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: TOML configuration with environment overrides

pub mod api;
pub mod checksum;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod render;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{DashboardError, DashboardResult};
