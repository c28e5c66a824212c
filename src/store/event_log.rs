//! Append-only event log persisted as a two-field CSV file.
//!
//! The store does not validate the sequence of events: replay and
//! integrity checks belong to the report builder.

use crate::errors::{AppError, AppResult, Corruption};
use crate::models::Event;
use crate::store::record::{from_record, to_record};
use csv::{ErrorKind, Position, ReaderBuilder, StringRecordsIntoIter, Trim, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the log file is present and holds at least one byte.
    /// A missing or empty log means the tool was never configured.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    /// Append one record at the end of the log and sync it to disk.
    pub fn append(&self, event: &Event) -> AppResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        write_event(file, event)?;

        debug!(path = %self.path.display(), kind = %event.kind, value = event.value, "event appended");
        Ok(())
    }

    /// Create (or truncate) the log with `first` as its only record.
    /// Used by the first-run configuration.
    pub fn create_with(&self, first: &Event) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let file = File::create(&self.path)?;
        write_event(file, first)?;

        debug!(path = %self.path.display(), "event log created");
        Ok(())
    }

    /// Lazily read every event in append order. Every call starts over
    /// from the beginning of the file.
    pub fn read_all(&self) -> AppResult<Events> {
        let file = File::open(&self.path)?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);

        debug!(path = %self.path.display(), "replaying event log");

        Ok(Events {
            path: self.path.clone(),
            records: reader.into_records(),
            records_read: 0,
        })
    }

    /// Delete the whole log. Returns false if there was nothing to delete.
    pub fn clear(&self) -> AppResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "event log deleted");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_event(file: File, event: &Event) -> AppResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(to_record(event))?;
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_data()?;
    Ok(())
}

/// Iterator over the events of a log, in append order.
pub struct Events {
    path: PathBuf,
    records: StringRecordsIntoIter<File>,
    records_read: usize,
}

impl Events {
    /// Line of the current record. Blank lines are skipped by the reader,
    /// so the record count is only a fallback.
    fn line_of(&self, pos: Option<&Position>) -> usize {
        pos.map(|p| p.line() as usize).unwrap_or(self.records_read)
    }

    /// Errors caused by the file's content are corruption; only I/O
    /// failures stay plain errors.
    fn classify(&self, err: csv::Error) -> AppError {
        let corruption = match err.kind() {
            ErrorKind::Utf8 { pos, err: utf8 } => {
                let line = self.line_of(pos.as_ref());
                if utf8.field() == 0 {
                    Some(Corruption::UnknownKind {
                        line,
                        kind: "<invalid utf-8>".to_string(),
                    })
                } else {
                    Some(Corruption::BadValue {
                        line,
                        value: "<invalid utf-8>".to_string(),
                    })
                }
            }
            ErrorKind::UnequalLengths { pos, .. } => Some(Corruption::MalformedRecord {
                line: self.line_of(pos.as_ref()),
            }),
            _ => None,
        };

        match corruption {
            Some(c) => AppError::corrupt(&self.path, c),
            None => AppError::from(err),
        }
    }
}

impl Iterator for Events {
    type Item = AppResult<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.records_read += 1;

        let parsed = match record {
            Ok(r) => {
                let line = self.line_of(r.position());
                from_record(&r, line).map_err(|c| AppError::corrupt(&self.path, c))
            }
            Err(e) => Err(self.classify(e)),
        };

        Some(parsed)
    }
}
