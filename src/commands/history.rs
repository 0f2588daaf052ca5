use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::cli::OutputFormat;
use crate::history::trend_report;
use crate::io::create_writer;
use crate::store::{JsonFileStore, RecordStore};

pub struct HistoryConfig {
    pub user: String,
    pub format: OutputFormat,
    pub store: Option<PathBuf>,
    pub month: Option<NaiveDate>,
}

/// Aggregate a user's saved calculations into the rolling 6-month window.
pub fn handle_history(config: HistoryConfig) -> Result<()> {
    let store_path = config.store.unwrap_or_else(JsonFileStore::default_path);
    let store = JsonFileStore::open(&store_path)?;
    let records = store.list_by_user(&config.user)?;
    log::debug!("{} records for {}", records.len(), config.user);

    let reference_month = config.month.unwrap_or_else(|| Local::now().date_naive());
    let trend = trend_report(&config.user, &records, reference_month);

    let mut writer = create_writer(config.format.into());
    writer.write_trend(&trend)?;
    Ok(())
}
