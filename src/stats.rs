//! Typing session statistics

use crate::capture::KeyLog;
use std::fmt::{self, Display, Formatter};

/// Summary derived from the session log: key count, elapsed time, and the
/// standard five-characters-per-word speed approximation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStats {
    pub total_keys: usize,
    pub duration_secs: f64,
    pub wpm: f64,
}

impl SessionStats {
    /// Compute statistics against the given "now" (epoch seconds).
    ///
    /// Returns `None` for an empty log. Duration is clamped at zero and a
    /// zero duration reports 0 WPM rather than dividing by zero.
    pub fn compute(log: &KeyLog, now_unix: f64) -> Option<Self> {
        if log.is_empty() {
            return None;
        }

        let duration_secs = log
            .session_start()
            .map(|start| (now_unix - start).max(0.0))
            .unwrap_or(0.0);
        let total_keys = log.len();
        let wpm = if duration_secs > 0.0 {
            (total_keys as f64 / 5.0) / (duration_secs / 60.0)
        } else {
            0.0
        };

        Some(Self {
            total_keys,
            duration_secs,
            wpm,
        })
    }
}

impl Display for SessionStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Keys: {}\nDuration: {:.1} sec\nSpeed: {:.1} WPM",
            self.total_keys, self.duration_secs, self.wpm
        )
    }
}
