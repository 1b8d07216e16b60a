use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only progress log, one `timestamp,message` line per stage boundary.
/// No rotation, no size bound, no locking; the job is single-threaded.
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProgressLog { path: path.into() }
    }

    /// Append one line, creating the file if absent.
    pub fn log(&self, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{timestamp},{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn each_call_appends_exactly_one_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("etl.log");
        let log = ProgressLog::new(&path);

        log.log("first").unwrap();
        log.log("second").unwrap();
        log.log("third").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn lines_are_timestamp_comma_message() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("etl.log");
        let log = ProgressLog::new(&path);
        log.log("Data extraction complete. Initiating Transformation process")
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let line = content.lines().next().unwrap();
        let (timestamp, message) = line.split_once(',').unwrap();
        NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap();
        assert_eq!(
            message,
            "Data extraction complete. Initiating Transformation process"
        );
    }

    #[test]
    fn appends_to_an_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("etl.log");
        fs::write(&path, "2023-09-02 18:53:26,older run\n").unwrap();

        ProgressLog::new(&path).log("newer run").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.starts_with("2023-09-02 18:53:26,older run"));
    }
}
