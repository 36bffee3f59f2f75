//! In-memory record source
//!
//! Holds records handed over by the caller and returns them as-is.

use crate::core::models::RawRecord;
use crate::core::ports::RecordSource;

/// Record source backed by a vector
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    /// Create a source over the given records, kept in order
    #[must_use]
    pub const fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Append a record
    pub fn push(&mut self, record: RawRecord) {
        self.records.push(record);
    }
}

impl RecordSource for MemorySource {
    fn records(&self) -> anyhow::Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory record(s)", self.records.len())
    }
}

impl FromIterator<RawRecord> for MemorySource {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
