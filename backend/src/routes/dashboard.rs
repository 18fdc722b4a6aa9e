use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bins::BinnedCategory;
use super::monthly::MonthlySeries;
use super::summary::{SummaryData, YearlyTotals};

// =========================================================
// Dashboard types + routes
// =========================================================

/// Metadata about the loaded dataset snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub name: String,
    pub records: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Hex SHA-256 of the source file
    pub fingerprint: String,
    /// Rows where `casual + registered != cnt`
    pub inconsistent_rows: usize,
}

/// Everything one dashboard pass computes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub dataset: DatasetSummary,
    pub summary: SummaryData,
    pub yearly: Vec<YearlyTotals>,
    pub monthly: MonthlySeries,
    pub bins: Vec<BinnedCategory>,
}

/// Route path for the full dashboard payload
pub const GET_DASHBOARD: &str = "/v1/dashboard";

/// Route path for a single rendered chart
pub const GET_CHART: &str = "/v1/charts/{chart}";
