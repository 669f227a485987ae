//! In-memory appender
//!
//! Keeps every record and fallback diagnostic it receives. Clones share the
//! same buffer, so a test can hand one clone to a registry and inspect the
//! other.

use crate::core::{Appender, LogRecord, LoggerError, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Captured {
    records: Vec<LogRecord>,
    fallbacks: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    captured: Arc<Mutex<Captured>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.captured.lock().records.clone()
    }

    /// Captured records rendered with `LogRecord::format_line`
    pub fn lines(&self) -> Vec<String> {
        self.captured
            .lock()
            .records
            .iter()
            .map(LogRecord::format_line)
            .collect()
    }

    /// Messages of the fallback diagnostics received
    pub fn fallbacks(&self) -> Vec<String> {
        self.captured.lock().fallbacks.clone()
    }

    pub fn len(&self) -> usize {
        self.captured.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captured.lock().records.is_empty()
    }

    pub fn clear(&self) {
        let mut captured = self.captured.lock();
        captured.records.clear();
        captured.fallbacks.clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.captured.lock().records.push(record.clone());
        Ok(())
    }

    fn append_fallback(&mut self, error: &LoggerError) -> Result<()> {
        self.captured.lock().fallbacks.push(error.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
