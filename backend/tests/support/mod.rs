#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use bikeshare_dashboard::models::{Dataset, UsageRecord};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub const CSV_HEADER: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

/// Path of a checked-in fixture under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Consistent record (`total = casual + registered`) with the given weather.
pub fn record(date_str: &str, casual: u64, registered: u64, weather: (f64, f64, f64)) -> UsageRecord {
    UsageRecord {
        date: date(date_str),
        casual,
        registered,
        total: casual + registered,
        temperature: weather.0,
        humidity: weather.1,
        windspeed: weather.2,
    }
}

/// Serialize records using the full `day.csv` column layout.
pub fn to_day_csv(records: &[UsageRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for (i, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{},{},1,0,1,0,0,0,1,{},{},{},{},{},{},{}\n",
            i + 1,
            r.date.format("%Y-%m-%d"),
            r.temperature,
            r.temperature,
            r.humidity,
            r.windspeed,
            r.casual,
            r.registered,
            r.total
        ));
    }
    out
}

/// Write CSV text to a temp file; the file lives as long as the handle.
pub fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("create temp file");
    write!(temp_file, "{}", content).expect("write temp file");
    temp_file
}

/// One record on the 15th of each month for `months` consecutive months
/// starting January 2011. `casual` is the 1-based month index.
pub fn monthly_dataset(months: u32) -> Dataset {
    let records = (0..months)
        .map(|i| {
            let year = 2011 + (i / 12) as i32;
            let month = i % 12 + 1;
            let casual = u64::from(i + 1);
            UsageRecord {
                date: NaiveDate::from_ymd_opt(year, month, 15).expect("valid date"),
                casual,
                registered: 100,
                total: casual + 100,
                temperature: f64::from(i % 5) / 4.0,
                humidity: f64::from(i % 7) / 6.0,
                windspeed: f64::from(i % 3) / 2.0,
            }
        })
        .collect();
    Dataset::new(records)
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
