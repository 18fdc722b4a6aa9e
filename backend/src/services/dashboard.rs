//! One full aggregation pass over the dataset.

use tracing::debug;

use crate::api::{DashboardData, DatasetSummary};
use crate::error::DashboardResult;
use crate::models::Dataset;

use super::binning::bin_all;
use super::monthly::last_n_months;
use super::totals::{compute_summary, compute_yearly_totals};

/// Describe the loaded snapshot.
pub fn dataset_summary(dataset: &Dataset, name: &str) -> DatasetSummary {
    DatasetSummary {
        name: name.to_string(),
        records: dataset.len(),
        first_date: dataset.first_date(),
        last_date: dataset.last_date(),
        fingerprint: dataset.fingerprint().to_string(),
        inconsistent_rows: dataset.inconsistent_count(),
    }
}

/// Compute every aggregate the dashboard shows.
///
/// Pure function of the dataset: nothing is cached between calls, so
/// repeated calls on the same dataset return identical data. Fails only when
/// a count sum overflows.
pub fn compute_dashboard(
    dataset: &Dataset,
    name: &str,
    month_window: usize,
) -> DashboardResult<DashboardData> {
    let records = dataset.records();
    debug!(records = records.len(), month_window, "Computing dashboard aggregates");

    Ok(DashboardData {
        dataset: dataset_summary(dataset, name),
        summary: compute_summary(records)?,
        yearly: compute_yearly_totals(records)?,
        monthly: last_n_months(records, month_window)?,
        bins: bin_all(records),
    })
}
