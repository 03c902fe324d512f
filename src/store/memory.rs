//! In-memory store implementation

use crate::analyzer::AnalysisResult;
use crate::store::traits::{RecordStore, StoreError, StoreResult};
use crate::store::StoredRecord;
use std::sync::{Mutex, MutexGuard};

/// Mutex-guarded list of records with a monotonic id counter
///
/// Ids are decimal strings starting at 1 and are never reused, even after
/// the record holding them is deleted.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    records: Vec<StoredRecord>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn position(&self, id: &str) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl RecordStore for MemoryStore {
    fn list(&self) -> StoreResult<Vec<StoredRecord>> {
        Ok(self.lock()?.records.clone())
    }

    fn get(&self, id: &str) -> StoreResult<StoredRecord> {
        let inner = self.lock()?;
        let index = inner.position(id)?;
        Ok(inner.records[index].clone())
    }

    fn insert(&self, result: AnalysisResult) -> StoreResult<StoredRecord> {
        let mut inner = self.lock()?;
        let record = StoredRecord {
            id: inner.next_id.to_string(),
            result,
        };
        inner.next_id += 1;
        inner.records.push(record.clone());
        tracing::debug!("Stored record {} for {}", record.id, record.result.url);
        Ok(record)
    }

    fn update(&self, id: &str, mut result: AnalysisResult) -> StoreResult<StoredRecord> {
        if result.inaccessible_link_count > result.external_link_count {
            return Err(StoreError::Invalid(format!(
                "inaccessible ({}) exceeds externallink ({})",
                result.inaccessible_link_count, result.external_link_count
            )));
        }

        let mut inner = self.lock()?;
        let index = inner.position(id)?;
        let existing = &mut inner.records[index];

        result.url = std::mem::take(&mut existing.result.url);
        existing.result = result;
        Ok(existing.clone())
    }

    fn delete(&self, id: &str) -> StoreResult<StoredRecord> {
        let mut inner = self.lock()?;
        let index = inner.position(id)?;
        Ok(inner.records.remove(index))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.records.len())
    }
}
