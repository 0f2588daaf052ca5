//! Monthly history aggregation for trend reporting.
//!
//! Pure functions of the input record set and a caller-supplied reference
//! month; the wall clock is never read here. Duplicate submissions within a
//! calendar month are resolved deterministically at read time: the record
//! with the greatest `created_at` is authoritative and the rest are ignored
//! (they stay in the store untouched).

use std::collections::HashMap;

use chrono::{Months, NaiveDate};
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{month_floor, CalculationRecord, MonthlyPoint};

/// Length of the rolling window, ending at the reference month inclusive.
pub const WINDOW_MONTHS: u32 = 6;

/// Build the gap-filled rolling window for one user's records, oldest month
/// first. The output always has exactly [`WINDOW_MONTHS`] entries; months
/// with no authoritative record are emitted as all-absent points, never
/// skipped or compacted.
pub fn monthly_series(
    records: &[CalculationRecord],
    reference_month: NaiveDate,
) -> Vector<MonthlyPoint> {
    let authoritative = authoritative_by_month(records);

    window_months(reference_month)
        .into_iter()
        .map(|month| match authoritative.get(&month) {
            Some(record) => MonthlyPoint {
                month,
                ltv: Some(record.ltv),
                cac: Some(record.cac),
                ratio: display_ratio(record),
            },
            None => MonthlyPoint::absent(month),
        })
        .collect()
}

/// Trend summary handed to the output layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub username: String,
    pub reference_month: NaiveDate,
    pub points: Vector<MonthlyPoint>,
}

pub fn trend_report(
    username: impl Into<String>,
    records: &[CalculationRecord],
    reference_month: NaiveDate,
) -> TrendReport {
    let reference_month = month_floor(reference_month);
    TrendReport {
        username: username.into(),
        reference_month,
        points: monthly_series(records, reference_month),
    }
}

/// Reduce each calendar month's records to the most recently created one.
/// Equal timestamps resolve to the record seen later in the input.
fn authoritative_by_month(
    records: &[CalculationRecord],
) -> HashMap<NaiveDate, &CalculationRecord> {
    let mut latest: HashMap<NaiveDate, &CalculationRecord> = HashMap::new();
    for record in records {
        let month = month_floor(record.analysis_date);
        let entry = latest.entry(month).or_insert(record);
        if record.created_at >= entry.created_at {
            *entry = record;
        }
    }
    latest
}

/// The window's months in order, oldest first, ending at the reference month.
fn window_months(reference_month: NaiveDate) -> Vec<NaiveDate> {
    let end = month_floor(reference_month);
    (0..WINDOW_MONTHS)
        .rev()
        .map(|back| end.checked_sub_months(Months::new(back)).unwrap_or(end))
        .collect()
}

/// Ratio for display. A zero CAC means "no ratio", not an error.
fn display_ratio(record: &CalculationRecord) -> Option<f64> {
    (record.cac > 0.0).then(|| record.ltv / record.cac)
}
