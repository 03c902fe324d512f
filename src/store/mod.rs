//! Record store for analysis results
//!
//! Results are handed to a [`RecordStore`] once an analysis completes; the
//! store assigns ids and serves the CRUD operations of the HTTP API.
//! Nothing is persisted across restarts.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{RecordStore, StoreError, StoreResult};

use crate::analyzer::AnalysisResult;
use serde::{Deserialize, Serialize};

/// An analysis result together with its store-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,

    #[serde(flatten)]
    pub result: AnalysisResult,
}
