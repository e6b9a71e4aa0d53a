//! In-memory keystroke log

use super::KeyRecord;

/// Append-only log of captured keystrokes for the current session.
///
/// Insertion order is capture order and doubles as the export order. The log
/// is only ever emptied by an explicit [`clear`](KeyLog::clear); records are
/// immutable once appended.
#[derive(Debug, Default)]
pub struct KeyLog {
    records: Vec<KeyRecord>,
    /// Raw timestamp of the first record since launch or the last clear
    session_start: Option<f64>,
}

impl KeyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. The first append after launch or a clear sets the
    /// session start timestamp.
    pub fn append(&mut self, record: KeyRecord) {
        if self.session_start.is_none() {
            self.session_start = Some(record.raw_timestamp);
        }
        self.records.push(record);
    }

    /// Empty the log and unset the session start. Idempotent.
    pub fn clear(&mut self) {
        self.records.clear();
        self.session_start = None;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[KeyRecord] {
        &self.records
    }

    pub fn session_start(&self) -> Option<f64> {
        self.session_start
    }
}
