//! HTTP server module for the dashboard.
//!
//! This module provides an axum-based HTTP server that serves the rendered
//! dashboard page and exposes the aggregates as a JSON API. It reuses the
//! service layer and the renderers from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and validation                           │
//! │  - HTML / SVG / JSON responses                            │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Render Layer (render/)                                   │
//! │  - plotters SVG charts, HTML page                         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Totals, monthly resampling, binning                    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset (models/, parsing/)                              │
//! │  - Loaded once at startup, shared read-only               │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
