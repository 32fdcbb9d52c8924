//! Evidence Store - the bundled, immutable evidence table.

mod data;

use crate::domain::{DisorderId, DisorderRecord};
use crate::ports::EvidenceLookup;

pub use data::DISORDERS;

/// Read-only view over the compile-time evidence table.
#[derive(Debug, Clone, Copy)]
pub struct StaticEvidenceStore {
    records: &'static [DisorderRecord],
}

impl Default for StaticEvidenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticEvidenceStore {
    /// Create a store over the bundled table.
    pub fn new() -> Self {
        Self {
            records: &DISORDERS,
        }
    }
}

impl EvidenceLookup for StaticEvidenceStore {
    fn lookup(&self, id: DisorderId) -> Option<&DisorderRecord> {
        // Table is in picker order, so the index is direct.
        self.records.get(id.index()).filter(|record| record.id == id)
    }

    fn disorders(&self) -> &[DisorderRecord] {
        self.records
    }
}
