use anyhow::Result;
use chrono::{Local, Utc};

use crate::advisory::RatioThresholds;
use crate::cli::{ComputeOpts, ScenarioCommand};
use crate::core::month_floor;
use crate::io::create_writer;
use crate::session::{analyze, CalculationRequest};
use crate::store::JsonFileStore;

/// Run one scenario calculation end to end and print the report.
pub fn handle_compute(opts: ComputeOpts, scenario: ScenarioCommand) -> Result<()> {
    let (inputs, acquisition) = scenario.to_inputs();

    let store_path = opts
        .store
        .clone()
        .unwrap_or_else(JsonFileStore::default_path);
    let mut store = JsonFileStore::open(&store_path)?;

    let today = Local::now().date_naive();
    let request = CalculationRequest {
        username: opts.user.clone().unwrap_or_default(),
        inputs,
        acquisition,
        analysis_date: opts.analysis_date.unwrap_or(today),
        notes: opts.notes.clone(),
        save: opts.save,
    };

    let report = analyze(
        &request,
        &mut store,
        Utc::now(),
        month_floor(today),
        &RatioThresholds::default(),
    )?;

    let mut writer = create_writer(opts.format.into());
    writer.write_report(&report)?;
    Ok(())
}
