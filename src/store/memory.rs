use crate::core::errors::StoreError;
use crate::core::{CalculationRecord, NewRecord, RecordId};
use crate::store::RecordStore;

/// In-memory record store for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<CalculationRecord>,
    next_id: RecordId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, record: NewRecord) -> Result<RecordId, StoreError> {
        self.next_id += 1;
        let id = self.next_id;
        self.records.push(record.into_record(id));
        Ok(id)
    }

    fn list_by_user(&self, username: &str) -> Result<Vec<CalculationRecord>, StoreError> {
        let mut records: Vec<CalculationRecord> = self
            .records
            .iter()
            .filter(|r| r.username == username)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.analysis_date.cmp(&a.analysis_date));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::core::Scenario;

    fn new_record(username: &str, month: u32) -> NewRecord {
        NewRecord {
            username: username.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, month, 5, 9, 0, 0).unwrap(),
            scenario: Scenario::Ecommerce,
            ltv: 120_000.0,
            cac: 40_000.0,
            notes: String::new(),
            analysis_date: NaiveDate::from_ymd_opt(2026, month, 1).unwrap(),
        }
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = MemoryStore::new();
        let first = store.insert(new_record("ada", 1)).unwrap();
        let second = store.insert(new_record("ada", 2)).unwrap();
        assert!(second > first);
    }

    #[test]
    fn list_filters_by_user_and_sorts_recent_first() {
        let mut store = MemoryStore::new();
        store.insert(new_record("ada", 1)).unwrap();
        store.insert(new_record("grace", 2)).unwrap();
        store.insert(new_record("ada", 3)).unwrap();

        let records = store.list_by_user("ada").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].analysis_date > records[1].analysis_date);
        assert!(records.iter().all(|r| r.username == "ada"));
    }
}
