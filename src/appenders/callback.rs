//! Closure-backed appender
//!
//! Hands each record to a function as the formatted header plus the cloned
//! payload, for hosts that want to route output themselves.

use crate::core::{Appender, LogRecord, Result, Value};

pub struct FnAppender<F>
where
    F: FnMut(&str, &[Value]) + Send + Sync,
{
    name: String,
    callback: F,
}

impl<F> FnAppender<F>
where
    F: FnMut(&str, &[Value]) + Send + Sync,
{
    /// # Example
    ///
    /// ```
    /// use ranked_logger::appenders::FnAppender;
    ///
    /// let appender = FnAppender::new(|header, payload| {
    ///     eprintln!("{} ({} values)", header, payload.len());
    /// });
    /// ```
    pub fn new(callback: F) -> Self {
        Self {
            name: "callback".to_string(),
            callback,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<F> Appender for FnAppender<F>
where
    F: FnMut(&str, &[Value]) + Send + Sync,
{
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        (self.callback)(&record.header(), &record.payload);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
