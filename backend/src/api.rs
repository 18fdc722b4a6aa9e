//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types served by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::bins::BinCount;
pub use crate::routes::bins::BinnedCategory;
pub use crate::routes::bins::Covariate;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::dashboard::DatasetSummary;
pub use crate::routes::monthly::MonthlyAggregate;
pub use crate::routes::monthly::MonthlySeries;
pub use crate::routes::summary::GrandTotals;
pub use crate::routes::summary::SummaryData;
pub use crate::routes::summary::UsageShare;
pub use crate::routes::summary::YearlyTotals;

pub use crate::models::{Dataset, UsageRecord};
