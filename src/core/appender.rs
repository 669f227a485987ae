//! Appender trait for log output destinations

use super::{
    error::{LoggerError, Result},
    log_record::LogRecord,
};

pub trait Appender: Send + Sync {
    fn append(&mut self, record: &LogRecord) -> Result<()>;

    /// Report a problem inside the logger itself, such as an unknown level
    /// name. Bypasses level filtering.
    fn append_fallback(&mut self, error: &LoggerError) -> Result<()> {
        eprintln!("Error: {}", error);
        Ok(())
    }

    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
