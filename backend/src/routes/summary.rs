use serde::{Deserialize, Serialize};

// =========================================================
// Summary types + route
// =========================================================

/// Grand totals of the three usage columns over the whole dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotals {
    pub casual: u64,
    pub registered: u64,
    pub total: u64,
}

/// One bar of the casual-vs-registered comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageShare {
    /// `casual` or `registered`
    pub user_type: String,
    pub sum: u64,
    /// Thousands-grouped `sum`, as printed above the bar
    pub formatted: String,
}

/// Summary endpoint payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryData {
    pub totals: GrandTotals,
    /// Bars sorted ascending by sum
    pub shares: Vec<UsageShare>,
}

/// Casual and registered sums for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTotals {
    pub year: i32,
    pub casual: u64,
    pub registered: u64,
}

/// Route path for the summary endpoint
pub const GET_SUMMARY: &str = "/v1/summary";

/// Route path for the per-year breakdown
pub const GET_YEARLY: &str = "/v1/yearly";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_totals_serialization() {
        let totals = GrandTotals {
            casual: 15,
            registered: 50,
            total: 65,
        };
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["casual"], 15);
        assert_eq!(json["registered"], 50);
        assert_eq!(json["total"], 65);
    }
}
