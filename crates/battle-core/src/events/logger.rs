//! Conflict Logger
//!
//! Append-only JSONL log with one line per resolved conflict.

use battle_events::ConflictRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Errors raised while writing the conflict log
#[derive(Debug, Error)]
pub enum LogError {
    #[error("conflict log I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode conflict record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes conflict records to a JSONL file, or just counts them
pub struct ConflictLog {
    writer: Option<BufWriter<File>>,
    record_count: u64,
}

impl ConflictLog {
    /// Create a log writing to the specified path, truncating any old content
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            record_count: 0,
        })
    }

    /// Create a log that discards records
    pub fn null() -> Self {
        Self {
            writer: None,
            record_count: 0,
        }
    }

    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Log a record
    pub fn log(&mut self, record: &ConflictRecord) -> Result<(), LogError> {
        self.record_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = record.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<(), LogError> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for ConflictLog {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!("failed to flush conflict log: {}", e);
        }
    }
}
