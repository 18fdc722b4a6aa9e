use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Monthly trend types + route
// =========================================================

/// Usage sums for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Last day of the month, used as the resampling label
    pub month_end: NaiveDate,
    /// English month name (`January`, ...)
    pub month_name: String,
    pub casual: u64,
    pub registered: u64,
    pub total: u64,
}

/// Chronological series of the most recent months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Requested window size
    pub window: usize,
    pub months: Vec<MonthlyAggregate>,
}

/// Route path for the monthly series endpoint
pub const GET_MONTHLY: &str = "/v1/monthly";

/// Default number of trailing months shown on the dashboard
pub const DEFAULT_MONTH_WINDOW: usize = 10;

/// Largest window accepted from a query string
pub const MAX_MONTH_WINDOW: usize = 120;
