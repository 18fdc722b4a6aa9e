//! Grand totals and the casual-vs-registered comparison.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::api::{GrandTotals, SummaryData, UsageShare, YearlyTotals};
use crate::error::{add_count, DashboardResult};
use crate::models::UsageRecord;
use crate::render::format::format_thousands;

/// Sum casual, registered and total counts across all records.
///
/// Fails with [`CountOverflow`](crate::DashboardError::CountOverflow) when a
/// column sum does not fit in `u64`.
pub fn compute_grand_totals(records: &[UsageRecord]) -> DashboardResult<GrandTotals> {
    records.iter().try_fold(GrandTotals::default(), |acc, r| {
        Ok(GrandTotals {
            casual: add_count(acc.casual, r.casual, "casual")?,
            registered: add_count(acc.registered, r.registered, "registered")?,
            total: add_count(acc.total, r.total, "cnt")?,
        })
    })
}

/// Build the two comparison bars, sorted ascending by sum.
///
/// The sort is stable, so on a tie `casual` stays first.
pub fn compute_usage_shares(totals: &GrandTotals) -> Vec<UsageShare> {
    let mut shares: Vec<UsageShare> = [("casual", totals.casual), ("registered", totals.registered)]
        .into_iter()
        .map(|(user_type, sum)| UsageShare {
            user_type: user_type.to_string(),
            sum,
            formatted: format_thousands(sum),
        })
        .collect();

    shares.sort_by_key(|s| s.sum);
    shares
}

/// Grand totals plus the sorted comparison bars.
pub fn compute_summary(records: &[UsageRecord]) -> DashboardResult<SummaryData> {
    let totals = compute_grand_totals(records)?;
    Ok(SummaryData {
        shares: compute_usage_shares(&totals),
        totals,
    })
}

/// Casual and registered sums per calendar year, ordered by year.
pub fn compute_yearly_totals(records: &[UsageRecord]) -> DashboardResult<Vec<YearlyTotals>> {
    let mut by_year: BTreeMap<i32, (u64, u64)> = BTreeMap::new();

    for record in records {
        let entry = by_year.entry(record.date.year()).or_insert((0, 0));
        entry.0 = add_count(entry.0, record.casual, "casual")?;
        entry.1 = add_count(entry.1, record.registered, "registered")?;
    }

    Ok(by_year
        .into_iter()
        .map(|(year, (casual, registered))| YearlyTotals {
            year,
            casual,
            registered,
        })
        .collect())
}
