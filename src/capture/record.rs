//! Captured keystroke records

use chrono::{DateTime, Local};

/// A single captured key press.
///
/// Both timestamp representations are derived from the same capture instant:
/// a human-readable wall-clock string for the log view and a raw epoch value
/// for duration math and export.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyRecord {
    /// Local wall-clock time of capture, `HH:MM:SS`
    pub display_timestamp: String,
    /// Seconds since the Unix epoch at capture, millisecond precision
    pub raw_timestamp: f64,
    /// Symbolic name of the key ("a", "Return", "F5")
    pub key_symbol: String,
}

impl KeyRecord {
    /// Build a record from a capture instant and a symbolic key name.
    pub fn at(instant: DateTime<Local>, key_symbol: impl Into<String>) -> Self {
        Self {
            display_timestamp: instant.format("%H:%M:%S").to_string(),
            raw_timestamp: instant.timestamp_millis() as f64 / 1000.0,
            key_symbol: key_symbol.into(),
        }
    }

    /// Epoch seconds with exactly three decimal digits, as written to the
    /// CSV `unix` column.
    pub fn unix_field(&self) -> String {
        format!("{:.3}", self.raw_timestamp)
    }

    /// One log-view line for this record.
    pub fn display_line(&self) -> String {
        format!("[{}] key: {}", self.display_timestamp, self.key_symbol)
    }
}
