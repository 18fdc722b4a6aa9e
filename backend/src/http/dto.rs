//! Data Transfer Objects for the HTTP API.
//!
//! Payload types for the dashboard endpoints are re-exported from the
//! routes module since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use crate::api::{
    // Bins
    BinCount, BinnedCategory, Covariate,
    // Dashboard
    DashboardData, DatasetSummary,
    // Monthly
    MonthlyAggregate, MonthlySeries,
    // Summary
    GrandTotals, SummaryData, UsageShare, YearlyTotals,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dataset: DatasetSummary,
}

/// Query parameters for the monthly endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonthlyQuery {
    /// Number of trailing months to return
    #[serde(default)]
    pub months: Option<usize>,
}

/// Charts that can be fetched individually as SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Usage,
    Monthly,
    Bins,
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches(".svg") {
            "usage" => Ok(ChartKind::Usage),
            "monthly" => Ok(ChartKind::Monthly),
            "bins" => Ok(ChartKind::Bins),
            other => Err(format!(
                "Unknown chart '{}'. Use usage, monthly or bins.",
                other
            )),
        }
    }
}
