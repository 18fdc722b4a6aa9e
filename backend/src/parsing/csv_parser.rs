use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::checksum::dataset_fingerprint;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Dataset, UsageRecord};
use crate::services::compute_grand_totals;

/// Columns that must be present in the header row. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "dteday",
    "casual",
    "registered",
    "cnt",
    "temp",
    "hum",
    "windspeed",
];

/// Raw CSV row as laid out in `day.csv`.
#[derive(Debug, Deserialize)]
struct DayRow {
    dteday: String,
    casual: u64,
    registered: u64,
    cnt: u64,
    temp: f64,
    hum: f64,
    windspeed: f64,
}

/// Load the dataset file, sort it by date and fingerprint its contents.
///
/// Any I/O or decoding failure is returned as an error; there is no
/// partial load. A file whose count columns cannot be summed in `u64` is
/// rejected here, so per-request aggregation over it cannot overflow.
pub fn parse_usage_csv(csv_path: &Path) -> DashboardResult<Dataset> {
    let bytes = fs::read(csv_path).map_err(|source| DashboardError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;

    let records = parse_usage_reader(bytes.as_slice(), csv_path)?;
    let dataset = Dataset::new(records).with_fingerprint(dataset_fingerprint(&bytes));

    // Monthly and yearly sums are bounded by the column totals
    let totals = compute_grand_totals(dataset.records())?;

    let inconsistent = dataset.inconsistent_count();
    info!(
        path = %csv_path.display(),
        records = dataset.len(),
        total = totals.total,
        inconsistent,
        "Loaded usage dataset"
    );

    Ok(dataset)
}

/// Decode usage records from any CSV reader, in file order.
///
/// `source` is only used in error messages.
pub fn parse_usage_reader<R: Read>(reader: R, source: &Path) -> DashboardResult<Vec<UsageRecord>> {
    let csv_error = |row: Option<u64>, message: String| DashboardError::Csv {
        path: source.to_path_buf(),
        row,
        message,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| csv_error(None, e.to_string()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(csv_error(
                None,
                format!("missing required column '{}'", column),
            ));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<DayRow>().enumerate() {
        let row_number = idx as u64 + 1;
        let row = result.map_err(|e| csv_error(Some(row_number), e.to_string()))?;

        let date = parse_date(&row.dteday).ok_or_else(|| DashboardError::InvalidDate {
            row: row_number,
            value: row.dteday.clone(),
        })?;

        for (column, value) in [("temp", row.temp), ("hum", row.hum), ("windspeed", row.windspeed)] {
            if !value.is_finite() {
                return Err(csv_error(
                    Some(row_number),
                    format!("column '{}' is not a finite number", column),
                ));
            }
        }

        let record = UsageRecord {
            date,
            casual: row.casual,
            registered: row.registered,
            total: row.cnt,
            temperature: row.temp,
            humidity: row.hum,
            windspeed: row.windspeed,
        };

        if !record.is_consistent() {
            warn!(
                row = row_number,
                date = %record.date,
                casual = record.casual,
                registered = record.registered,
                total = record.total,
                "casual + registered does not match cnt"
            );
        }

        records.push(record);
    }

    debug!(rows = records.len(), "Decoded CSV rows");
    Ok(records)
}

/// Parse a calendar date, accepting the layouts seen in exports of the
/// dataset. Timestamps keep only their date part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(ts.date());
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.date_naive())
}
