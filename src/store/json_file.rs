use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::errors::StoreError;
use crate::core::{CalculationRecord, NewRecord, RecordId};
use crate::store::RecordStore;

/// Record store backed by a single JSON document on disk.
///
/// The whole store is loaded on open and rewritten on every insert; writes go
/// to a sibling temp file first and are moved into place, so a crash mid-write
/// leaves the previous document intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: StoreState,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    next_id: RecordId,
    records: Vec<CalculationRecord>,
}

impl JsonFileStore {
    /// Open a store file, creating an empty store if the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))
                .map_err(StoreError::Read)?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))
                .map_err(StoreError::Read)?
        } else {
            StoreState::default()
        };
        log::debug!(
            "opened record store at {} ({} records)",
            path.display(),
            state.records.len()
        );
        Ok(JsonFileStore { path, state })
    }

    /// Default store location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ltvmap")
            .join("records.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let write = || -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            let json = serde_json::to_string_pretty(&self.state)?;
            let temp_path = self.path.with_extension("json.tmp");
            fs::write(&temp_path, json)
                .with_context(|| format!("writing {}", temp_path.display()))?;
            fs::rename(&temp_path, &self.path)
                .with_context(|| format!("moving {} into place", temp_path.display()))?;
            Ok(())
        };
        write().map_err(StoreError::Write)
    }
}

impl RecordStore for JsonFileStore {
    fn insert(&mut self, record: NewRecord) -> Result<RecordId, StoreError> {
        self.state.next_id += 1;
        let id = self.state.next_id;
        self.state.records.push(record.into_record(id));
        self.persist()?;
        log::info!("saved calculation record {id}");
        Ok(id)
    }

    fn list_by_user(&self, username: &str) -> Result<Vec<CalculationRecord>, StoreError> {
        let mut records: Vec<CalculationRecord> = self
            .state
            .records
            .iter()
            .filter(|r| r.username == username)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.analysis_date.cmp(&a.analysis_date));
        Ok(records)
    }
}
