//! Record store boundary.
//!
//! The calculation core only ever talks to [`RecordStore`]; records are
//! immutable once inserted and there is no update or delete path. Conflicting
//! submissions for the same user and month are allowed to coexist and are
//! resolved at read time by the history aggregator.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::errors::StoreError;
use crate::core::{CalculationRecord, NewRecord, RecordId};

pub trait RecordStore {
    /// Insert a record and return its store-assigned id.
    fn insert(&mut self, record: NewRecord) -> Result<RecordId, StoreError>;

    /// All records owned by a user, most recent analysis month first.
    fn list_by_user(&self, username: &str) -> Result<Vec<CalculationRecord>, StoreError>;
}
