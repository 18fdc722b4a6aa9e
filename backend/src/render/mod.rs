//! Presentation layer: SVG charts and the HTML dashboard page.
//!
//! - [`format`]: number formatting and HTML escaping
//! - [`charts`]: plotters-based chart rendering
//! - [`page`]: the full dashboard document

pub mod charts;
pub mod format;
pub mod page;

pub use charts::{render_bins_chart, render_monthly_chart, render_usage_chart};
pub use format::format_thousands;
pub use page::render_dashboard_page;
