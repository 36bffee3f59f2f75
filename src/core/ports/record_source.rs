//! Record source port
//!
//! Defines the interface for reading raw records.

use super::super::models::RawRecord;

/// A provider of raw records
///
/// Implementations decide where records come from and in what order; the
/// order they return is the load order.
pub trait RecordSource: Send + Sync {
    /// Read every record, in load order
    fn records(&self) -> anyhow::Result<Vec<RawRecord>>;

    /// Short human-readable description of the source (e.g., a directory)
    fn describe(&self) -> String {
        "records".to_string()
    }
}
