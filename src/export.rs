//! CSV export of the keystroke log

use crate::capture::KeyLog;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Header row naming the three record fields, in export order.
pub const CSV_HEADER: &str = "timestamp,unix,key";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize the full log to CSV: one header row, then one row per record in
/// capture order, each row newline-terminated.
pub fn to_csv(log: &KeyLog) -> String {
    let mut out = String::with_capacity(32 * (log.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in log.records() {
        out.push_str(&csv_field(&record.display_timestamp));
        out.push(',');
        out.push_str(&record.unix_field());
        out.push(',');
        out.push_str(&csv_field(&record.key_symbol));
        out.push('\n');
    }
    out
}

/// Write the log as CSV to `path`, overwriting any existing file.
///
/// Returns the number of records written. The file handle closes when the
/// write finishes, success or not.
pub fn write_csv(log: &KeyLog, path: &Path) -> Result<usize, ExportError> {
    let wrap = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_csv(log).as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    log::info!("wrote {} records to {}", log.len(), path.display());
    Ok(log.len())
}

/// Quote a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::KeyRecord;
    use chrono::{Local, TimeZone};

    fn log_of(keys: &[&str]) -> KeyLog {
        let instant = Local.with_ymd_and_hms(2024, 5, 10, 14, 3, 22).unwrap();
        let mut log = KeyLog::new();
        for key in keys {
            log.append(KeyRecord::at(instant, *key));
        }
        log
    }

    #[test]
    fn empty_log_serializes_to_header_only() {
        let csv = to_csv(&KeyLog::new());
        assert_eq!(csv, "timestamp,unix,key\n");
    }

    #[test]
    fn one_line_per_record_plus_header() {
        let log = log_of(&["a", "b", "Return"]);
        let csv = to_csv(&log);
        assert_eq!(csv.lines().count(), 4);
        assert!(csv.starts_with("timestamp,unix,key\n"));
    }

    #[test]
    fn rows_carry_all_three_fields() {
        let log = log_of(&["Return"]);
        let csv = to_csv(&log);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "14:03:22");
        assert!(fields[1].ends_with(".000"));
        assert_eq!(fields[2], "Return");
    }

    #[test]
    fn comma_key_is_quoted() {
        let log = log_of(&[","]);
        let csv = to_csv(&log);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(",\",\""));
    }

    #[test]
    fn quote_key_is_quoted_and_doubled() {
        let log = log_of(&["\""]);
        let csv = to_csv(&log);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(",\"\"\"\"\""));
    }

    #[test]
    fn plain_fields_are_unquoted() {
        assert_eq!(csv_field("Return"), "Return");
        assert_eq!(csv_field("a"), "a");
    }

    #[test]
    fn write_csv_overwrites_existing_file() {
        let path = std::env::temp_dir().join(format!(
            "keystroke-visualizer-test-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "stale contents").unwrap();

        let log = log_of(&["a", "b"]);
        let written = write_csv(&log, &path).expect("write failed");
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("timestamp,unix,key\n"));
        assert_eq!(contents.lines().count(), 3);
        assert!(!contents.contains("stale"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn write_csv_reports_io_failure() {
        let log = log_of(&["a"]);
        let bad = Path::new("/nonexistent-dir/out.csv");
        let result = write_csv(&log, bad);
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
