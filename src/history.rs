/// Bounded most-recent-first history of past conversions
use crate::urls::{Mode, UrlEntry};
use serde::{Deserialize, Serialize};

/// Oldest records are dropped beyond this many.
pub const HISTORY_CAPACITY: usize = 10;

/// One past generation event. Immutable once recorded; it leaves the ring
/// only by capacity eviction or the end of the browser session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub mode: Mode,
    pub text: String,
    pub urls: Vec<UrlEntry>,
    /// Epoch milliseconds at recording time.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryRing {
    records: Vec<HistoryRecord>,
}

impl HistoryRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the ring from records read back from the session store,
    /// newest first. Oversized payloads are clamped to capacity.
    pub fn from_records(mut records: Vec<HistoryRecord>) -> Self {
        records.truncate(HISTORY_CAPACITY);
        HistoryRing { records }
    }

    /// Prepend a record, evicting the oldest beyond capacity.
    pub fn record(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAPACITY);
    }

    /// All records, most recent first.
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
