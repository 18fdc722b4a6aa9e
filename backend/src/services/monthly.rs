//! Calendar-month resampling of the daily records.

use std::collections::BTreeMap;

use chrono::{Month, Months, NaiveDate};

use crate::api::{MonthlyAggregate, MonthlySeries};
use crate::error::{add_count, DashboardResult};
use crate::models::UsageRecord;

/// Last day of the given month. Only fails at the edge of chrono's
/// supported date range.
fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_default()
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Sum usage per calendar month, covering every month between the first and
/// the last record. Months without records are present with zero sums.
pub fn resample_monthly(records: &[UsageRecord]) -> DashboardResult<Vec<MonthlyAggregate>> {
    let mut sums: BTreeMap<(i32, u32), (u64, u64, u64)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.month_key()).or_insert((0, 0, 0));
        entry.0 = add_count(entry.0, record.casual, "casual")?;
        entry.1 = add_count(entry.1, record.registered, "registered")?;
        entry.2 = add_count(entry.2, record.total, "cnt")?;
    }

    let (Some(&first), Some(&last)) = (sums.keys().next(), sums.keys().next_back()) else {
        return Ok(Vec::new());
    };

    let mut months = Vec::new();
    let mut key = first;
    loop {
        let (casual, registered, total) = sums.get(&key).copied().unwrap_or((0, 0, 0));
        if let Some(end) = month_end(key.0, key.1) {
            months.push(MonthlyAggregate {
                month_end: end,
                month_name: month_name(key.1),
                casual,
                registered,
                total,
            });
        }
        if key == last {
            break;
        }
        key = next_month(key);
    }

    Ok(months)
}

/// The `window` most recent calendar months, oldest first.
pub fn last_n_months(records: &[UsageRecord], window: usize) -> DashboardResult<MonthlySeries> {
    let mut months = resample_monthly(records)?;
    let skip = months.len().saturating_sub(window);
    months.drain(..skip);

    Ok(MonthlySeries { window, months })
}
