use chrono::{Datelike, Duration, Months, NaiveDate, TimeZone, Utc};
use ltvmap::{monthly_series, trend_report, CalculationRecord, Scenario, WINDOW_MONTHS};
use proptest::prelude::*;

fn base_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

fn record(id: u64, months_back: u32, created_offset_hours: i64, ltv: f64, cac: f64) -> CalculationRecord {
    let analysis_date = base_month()
        .checked_sub_months(Months::new(months_back))
        .unwrap();
    CalculationRecord {
        id,
        username: "ada".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()
            + Duration::hours(created_offset_hours),
        scenario: Scenario::Saas,
        ltv,
        cac,
        notes: String::new(),
        analysis_date,
    }
}

#[test]
fn empty_input_yields_six_absent_points() {
    let series = monthly_series(&[], base_month());
    assert_eq!(series.len(), WINDOW_MONTHS as usize);
    assert!(series.iter().all(|p| !p.has_data()));
    assert!(series.iter().all(|p| p.ratio.is_none()));
}

#[test]
fn duplicate_month_resolves_to_latest_created() {
    let records = vec![
        record(1, 0, 1, 1_000.0, 100.0),
        record(2, 0, 5, 2_000.0, 100.0),
        record(3, 0, 3, 3_000.0, 100.0),
    ];
    let series = monthly_series(&records, base_month());
    let current = series.last().unwrap();
    assert_eq!(current.ltv, Some(2_000.0));
    assert_eq!(current.ratio, Some(20.0));
}

#[test]
fn day_of_month_does_not_split_the_group() {
    let mid_month = base_month().with_day(19).unwrap();
    let mut early = record(1, 0, 1, 1_000.0, 100.0);
    let mut late = record(2, 0, 8, 2_000.0, 100.0);
    early.analysis_date = base_month();
    late.analysis_date = mid_month;

    let series = monthly_series(&[early, late], base_month());
    assert_eq!(series.last().unwrap().ltv, Some(2_000.0));
}

#[test]
fn window_keeps_trailing_six_months_oldest_first() {
    let records: Vec<CalculationRecord> = (0..9)
        .map(|back| record(back as u64 + 1, back, back as i64, 1_000.0 * (back + 1) as f64, 100.0))
        .collect();

    let series = monthly_series(&records, base_month());
    assert_eq!(series.len(), 6);

    // Oldest month in the window is five months back; everything older is
    // excluded even though records exist for it.
    let expected_first = base_month().checked_sub_months(Months::new(5)).unwrap();
    assert_eq!(series.front().unwrap().month, expected_first);
    assert_eq!(series.front().unwrap().ltv, Some(6_000.0));
    assert_eq!(series.last().unwrap().month, base_month());
    assert_eq!(series.last().unwrap().ltv, Some(1_000.0));

    let months: Vec<NaiveDate> = series.iter().map(|p| p.month).collect();
    let mut sorted = months.clone();
    sorted.sort();
    assert_eq!(months, sorted);
}

#[test]
fn gaps_stay_explicit_between_sparse_months() {
    let records = vec![record(1, 3, 0, 5_000.0, 500.0), record(2, 0, 1, 6_000.0, 600.0)];
    let series = monthly_series(&records, base_month());

    let with_data: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|(_, p)| p.has_data())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(with_data, vec![2, 5]);
}

#[test]
fn aggregation_is_idempotent() {
    let records = vec![
        record(1, 0, 1, 1_000.0, 100.0),
        record(2, 2, 4, 2_000.0, 200.0),
        record(3, 2, 2, 9_000.0, 200.0),
    ];
    let first = monthly_series(&records, base_month());
    let second = monthly_series(&records, base_month());
    assert_eq!(first, second);
}

#[test]
fn trend_report_normalizes_the_reference_month() {
    let trend = trend_report("ada", &[], base_month().with_day(28).unwrap());
    assert_eq!(trend.reference_month, base_month());
    assert_eq!(trend.points.len(), 6);
    assert_eq!(trend.username, "ada");
}

prop_compose! {
    fn arb_record()(
        id in 1u64..10_000,
        months_back in 0u32..18,
        created_offset in 0i64..720,
        ltv in 0.0f64..1e9,
        cac in 0.0f64..1e6,
    ) -> CalculationRecord {
        record(id, months_back, created_offset, ltv, cac)
    }
}

proptest! {
    #[test]
    fn series_always_has_six_points(records in prop::collection::vec(arb_record(), 0..40)) {
        let series = monthly_series(&records, base_month());
        prop_assert_eq!(series.len(), WINDOW_MONTHS as usize);
    }

    #[test]
    fn series_is_a_pure_function_of_its_inputs(records in prop::collection::vec(arb_record(), 0..40)) {
        let first = monthly_series(&records, base_month());
        let second = monthly_series(&records, base_month());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn months_are_consecutive_and_end_at_reference(records in prop::collection::vec(arb_record(), 0..40)) {
        let series = monthly_series(&records, base_month());
        prop_assert_eq!(series.last().unwrap().month, base_month());
        for (earlier, later) in series.iter().zip(series.iter().skip(1)) {
            prop_assert_eq!(
                earlier.month.checked_add_months(Months::new(1)).unwrap(),
                later.month
            );
        }
    }
}
