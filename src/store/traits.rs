//! Store trait and error types

use crate::analyzer::AnalysisResult;
use crate::store::StoredRecord;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid record: {0}")]
    Invalid(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for record store implementations
///
/// Implementations own their synchronization; every method takes `&self`
/// so a single store can be shared between request handlers.
pub trait RecordStore: Send + Sync {
    /// All records, in insertion order
    fn list(&self) -> StoreResult<Vec<StoredRecord>>;

    /// Gets a record by id
    fn get(&self, id: &str) -> StoreResult<StoredRecord>;

    /// Stores a new result and assigns it a fresh id
    fn insert(&self, result: AnalysisResult) -> StoreResult<StoredRecord>;

    /// Replaces the analysis fields of a record
    ///
    /// The id and the analyzed URL of the existing record are kept. A result
    /// reporting more inaccessible than external links is rejected as
    /// [`StoreError::Invalid`].
    fn update(&self, id: &str, result: AnalysisResult) -> StoreResult<StoredRecord>;

    /// Removes a record, returning it
    fn delete(&self, id: &str) -> StoreResult<StoredRecord>;

    /// Number of stored records
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
