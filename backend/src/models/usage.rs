//! Daily usage records and the immutable dataset built from them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One calendar day of bike-sharing usage.
///
/// Weather covariates are the normalized values shipped with the dataset
/// (temperature divided by 41, humidity by 100, wind speed by 67).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub date: NaiveDate,
    pub casual: u64,
    pub registered: u64,
    pub total: u64,
    pub temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
}

impl UsageRecord {
    /// Whether `total` equals `casual + registered`.
    pub fn is_consistent(&self) -> bool {
        self.casual.checked_add(self.registered) == Some(self.total)
    }

    /// Calendar month key `(year, month)` this record belongs to.
    pub fn month_key(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }
}

/// Ordered, read-only collection of usage records.
///
/// Records are sorted ascending by date on construction and never mutated
/// afterwards; the server shares one instance behind an `Arc`.
/// Deserialization goes through [`Dataset::new`] so the order holds there too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawDataset")]
pub struct Dataset {
    records: Vec<UsageRecord>,
    /// Hex SHA-256 of the source bytes, empty for in-memory datasets.
    fingerprint: String,
}

/// Wire form of [`Dataset`] before sorting.
#[derive(Deserialize)]
struct RawDataset {
    records: Vec<UsageRecord>,
    #[serde(default)]
    fingerprint: String,
}

impl From<RawDataset> for Dataset {
    fn from(raw: RawDataset) -> Self {
        Dataset::new(raw.records).with_fingerprint(raw.fingerprint)
    }
}

impl Dataset {
    /// Build a dataset, sorting records by date. The sort is stable so rows
    /// sharing a date keep their file order.
    pub fn new(mut records: Vec<UsageRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self {
            records,
            fingerprint: String::new(),
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = fingerprint.into();
        self
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// Number of records where `total != casual + registered`.
    pub fn inconsistent_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_consistent()).count()
    }
}
