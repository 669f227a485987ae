//! Log record structure

use super::log_level::Rank;
use super::value::Value;
use serde::Serialize;

/// Marker placed between the message items and the context value
pub const CONTEXT_MARKER: &str = "Context: ";

/// One accepted log call, ready for appenders.
///
/// The payload is already a deep copy, so appenders may keep the record
/// around without seeing later changes made by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub logger: String,
    pub level: String,
    pub rank: Rank,
    pub timestamp: String,
    pub payload: Vec<Value>,
    /// Whether the payload ends with the context marker and a context value
    pub has_context: bool,
}

impl LogRecord {
    pub fn new(
        logger: impl Into<String>,
        level: impl Into<String>,
        rank: Rank,
        timestamp: impl Into<String>,
        payload: Vec<Value>,
    ) -> Self {
        Self {
            logger: logger.into(),
            level: level.into(),
            rank,
            timestamp: timestamp.into(),
            payload,
            has_context: false,
        }
    }

    /// Mark the last two payload items as the context marker and value
    #[must_use]
    pub fn with_context_flag(mut self, has_context: bool) -> Self {
        self.has_context = has_context;
        self
    }

    /// `[<timestamp>] <logger>.<level>`
    pub fn header(&self) -> String {
        format!("[{}] {}.{}", self.timestamp, self.logger, self.level)
    }

    /// Payload rendered the way the console shows it: `["a", 1, "Context: ", {k: v}]`
    pub fn payload_string(&self) -> String {
        Value::List(self.payload.clone()).to_string()
    }

    /// Header and payload on one line
    pub fn format_line(&self) -> String {
        format!("{} {}", self.header(), self.payload_string())
    }

    /// Message items, without the context marker and value
    pub fn message(&self) -> &[Value] {
        match self.context_index() {
            Some(idx) => &self.payload[..idx],
            None => &self.payload,
        }
    }

    /// The context value, if the call supplied one
    pub fn context(&self) -> Option<&Value> {
        self.context_index().map(|idx| &self.payload[idx + 1])
    }

    fn context_index(&self) -> Option<usize> {
        match self.payload.len() {
            len if self.has_context && len >= 2 => Some(len - 2),
            _ => None,
        }
    }
}
