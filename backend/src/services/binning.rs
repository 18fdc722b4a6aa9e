//! Equal-width binning of the weather covariates.
//!
//! Edges are spread evenly between the observed minimum and maximum. Bins are
//! right-closed: a value sitting exactly on an interior edge belongs to the
//! lower bin, the minimum belongs to the first bin and the maximum to the
//! last. When every value is identical all records land in the first bin.

use crate::api::{BinCount, BinnedCategory, Covariate};
use crate::models::UsageRecord;

fn covariate_value(record: &UsageRecord, covariate: Covariate) -> f64 {
    match covariate {
        Covariate::Temperature => record.temperature,
        Covariate::Humidity => record.humidity,
        Covariate::Windspeed => record.windspeed,
    }
}

/// Observed `(min, max)` of the values, `None` when there are none.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

/// `n_bins + 1` equal-width edges from `min` to `max`. The last edge is
/// `max` itself so rounding never leaves the maximum outside the top bin.
pub fn bin_edges(min: f64, max: f64, n_bins: usize) -> Vec<f64> {
    let n_bins = n_bins.max(1);
    let width = (max - min) / n_bins as f64;

    let mut edges: Vec<f64> = (0..n_bins).map(|i| min + width * i as f64).collect();
    edges.push(max);
    edges
}

/// Index of the bin `value` falls in, given edges from [`bin_edges`].
pub fn assign_bin(value: f64, edges: &[f64]) -> usize {
    let n_bins = edges.len().saturating_sub(1).max(1);
    edges
        .iter()
        .skip(1)
        .position(|&upper| value <= upper)
        .unwrap_or(n_bins - 1)
}

/// Bin one covariate and tally the records per label, in label order.
/// Labels without records are kept with a zero count.
pub fn bin_covariate(records: &[UsageRecord], covariate: Covariate) -> BinnedCategory {
    let labels = covariate.labels();
    let values: Vec<f64> = records
        .iter()
        .map(|r| covariate_value(r, covariate))
        .collect();

    let (min, max) = value_range(&values).unwrap_or((0.0, 0.0));
    let edges = bin_edges(min, max, labels.len());

    let mut counts = vec![0usize; labels.len()];
    for value in &values {
        counts[assign_bin(*value, &edges)] += 1;
    }

    let bins = labels
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(idx, (label, count))| BinCount {
            label: label.to_string(),
            lower: edges[idx],
            upper: edges[idx + 1],
            count,
        })
        .collect();

    BinnedCategory { covariate, bins }
}

/// Temperature, humidity and wind speed bins, in that order.
pub fn bin_all(records: &[UsageRecord]) -> Vec<BinnedCategory> {
    Covariate::ALL
        .iter()
        .map(|&covariate| bin_covariate(records, covariate))
        .collect()
}
