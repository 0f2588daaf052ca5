//! End-to-end orchestration of one calculation request.
//!
//! Stateless per invocation: formula, then classifier, then optional
//! persistence and history aggregation against the caller's record store.
//! Timestamps come in as arguments so the core never reads the wall clock.
//! Store failures are surfaced unchanged; nothing here retries.

use chrono::{DateTime, NaiveDate, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::advisory::{assess, benchmark, RatioAssessment, RatioThresholds};
use crate::core::errors::{DomainError, Result};
use crate::core::{month_floor, MonthlyPoint, NewRecord, RecordId, Scenario};
use crate::formulas::{cac, ScenarioInputs};
use crate::history::monthly_series;
use crate::store::RecordStore;

/// Acquisition-side inputs shared by every scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionInputs {
    pub total_acquisition_cost: f64,
    pub total_customers_acquired: f64,
}

/// One calculation request as handed in by the caller.
#[derive(Clone, Debug)]
pub struct CalculationRequest {
    pub username: String,
    pub inputs: ScenarioInputs,
    pub acquisition: AcquisitionInputs,
    /// Reporting month the result belongs to; normalized to day 1 on save.
    pub analysis_date: NaiveDate,
    pub notes: String,
    pub save: bool,
}

/// Point-in-time result of formula plus classifier, before any persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scenario: Scenario,
    pub ltv: f64,
    pub cac: f64,
    pub assessment: RatioAssessment,
    pub benchmark: String,
    /// Whether the result is eligible for saving as a record. Records hold
    /// non-negative amounts only, so a negative LTV is reported but never
    /// offered for persistence.
    pub offer_save: bool,
}

/// Full session output: evaluation plus the user's monthly trend window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub scenario: Scenario,
    pub analysis_month: NaiveDate,
    pub ltv: f64,
    pub cac: f64,
    pub assessment: RatioAssessment,
    pub benchmark: String,
    pub offer_save: bool,
    /// Id of the record persisted by this invocation, if any.
    pub saved: Option<RecordId>,
    pub monthly_series: Vector<MonthlyPoint>,
}

/// Run formula and classifier for one scenario. Pure; no store involved.
pub fn evaluate(
    inputs: &ScenarioInputs,
    acquisition: &AcquisitionInputs,
    thresholds: &RatioThresholds,
) -> std::result::Result<Evaluation, DomainError> {
    let scenario = inputs.scenario();
    let ltv = inputs.ltv()?;
    let cac = cac(
        acquisition.total_acquisition_cost,
        acquisition.total_customers_acquired,
    )?;
    let assessment = assess(ltv, cac, thresholds)?;

    Ok(Evaluation {
        scenario,
        ltv,
        cac,
        assessment,
        benchmark: benchmark(scenario).label.to_string(),
        offer_save: ltv >= 0.0,
    })
}

/// Execute one full request: evaluate, optionally persist, then rebuild the
/// user's monthly series from the store.
///
/// `submitted_at` becomes the record's creation timestamp; `current_month`
/// anchors the trend window. Both are caller-supplied for testability.
pub fn analyze(
    request: &CalculationRequest,
    store: &mut dyn RecordStore,
    submitted_at: DateTime<Utc>,
    current_month: NaiveDate,
    thresholds: &RatioThresholds,
) -> Result<AnalysisReport> {
    let evaluation = evaluate(&request.inputs, &request.acquisition, thresholds)?;
    let analysis_month = month_floor(request.analysis_date);

    let saved = if request.save && evaluation.offer_save {
        let id = store.insert(NewRecord {
            username: request.username.clone(),
            created_at: submitted_at,
            scenario: evaluation.scenario,
            ltv: evaluation.ltv,
            cac: evaluation.cac,
            notes: request.notes.clone(),
            analysis_date: analysis_month,
        })?;
        Some(id)
    } else {
        if request.save {
            log::warn!("result not eligible for saving; record skipped");
        }
        None
    };

    let records = store.list_by_user(&request.username)?;
    let monthly_series = monthly_series(&records, month_floor(current_month));

    Ok(AnalysisReport {
        scenario: evaluation.scenario,
        analysis_month,
        ltv: evaluation.ltv,
        cac: evaluation.cac,
        assessment: evaluation.assessment,
        benchmark: evaluation.benchmark,
        offer_save: evaluation.offer_save,
        saved,
        monthly_series,
    })
}
