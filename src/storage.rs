//! # Storage Module
//!
//! Record file persistence: truncate-and-replace delimited write, wholesale
//! read. The write path is best-effort (failures are logged and swallowed,
//! matching the rest of the collection pipeline's degrade-to-empty
//! behavior); the read path returns its failure because a missing or
//! corrupt record file leaves the search phase with nothing to work on.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{error, info};

use crate::error::ScrapeError;
use crate::record::Anecdote;

/// Header row of the record file.
const HEADER: [&str; 2] = ["category", "body"];

/// Writes the full record list, replacing any previous file content.
///
/// Failures are logged and swallowed; callers cannot detect a failed write.
pub fn write_records(path: &Path, delimiter: u8, records: &[Anecdote]) {
    match try_write(path, delimiter, records) {
        Ok(()) => info!(path = %path.display(), count = records.len(), "record file written"),
        Err(error) => error!(path = %path.display(), %error, "failed to write record file"),
    }
}

fn try_write(path: &Path, delimiter: u8, records: &[Anecdote]) -> Result<(), ScrapeError> {
    let ctx = |source| ScrapeError::RecordFile {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)
        .map_err(ctx)?;
    writer.write_record(HEADER).map_err(ctx)?;
    for record in records {
        writer.serialize(record).map_err(ctx)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads the record file back, skipping the header row.
pub fn read_records(path: &Path, delimiter: u8) -> Result<Vec<Anecdote>, ScrapeError> {
    let ctx = |source| ScrapeError::RecordFile {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(path)
        .map_err(ctx)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(ctx)?);
    }
    info!(path = %path.display(), count = records.len(), "record file read");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_preserves_records_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("res.csv");
        let records = vec![
            Anecdote::new("Animals", "A cat walks into a bar"),
            Anecdote::new("Work", "The deadline was yesterday"),
        ];

        write_records(&path, b';', &records);
        let read_back = read_records(&path, b';').unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn empty_run_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("res.csv");

        write_records(&path, b';', &[]);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim_end(), "category;body");
        assert!(read_records(&path, b';').unwrap().is_empty());
    }

    #[test]
    fn write_replaces_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("res.csv");

        write_records(&path, b';', &[Anecdote::new("Old", "stale entry")]);
        let fresh = vec![Anecdote::new("New", "fresh entry")];
        write_records(&path, b';', &fresh);

        assert_eq!(read_records(&path, b';').unwrap(), fresh);
    }

    #[test]
    fn write_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // The directory itself is not a writable file path.
        write_records(dir.path(), b';', &[Anecdote::new("A", "b")]);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.csv");
        assert!(read_records(&missing, b';').is_err());
    }
}
