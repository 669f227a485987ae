//! Console appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
#[cfg(feature = "console")]
use crate::core::Level;
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Which standard stream the console appender writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

pub struct ConsoleAppender {
    use_colors: bool,
    target: ConsoleTarget,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            target: ConsoleTarget::default(),
        }
    }

    /// Color the `<logger>.<level>` part of the header by level.
    ///
    /// Has no effect without the `console` feature.
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            target: ConsoleTarget::default(),
        }
    }

    /// Set the stream this appender writes to
    ///
    /// # Example
    ///
    /// ```
    /// use ranked_logger::appenders::{ConsoleAppender, ConsoleTarget};
    ///
    /// let appender = ConsoleAppender::new().with_target(ConsoleTarget::Stderr);
    /// ```
    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    fn write_line(&self, line: &str) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn format_text(&self, record: &LogRecord) -> String {
        if !self.use_colors {
            return record.format_line();
        }
        #[cfg(feature = "console")]
        if let Ok(level) = record.level.parse::<Level>() {
            let source = format!("{}.{}", record.logger, record.level);
            return format!(
                "[{}] {} {}",
                record.timestamp,
                source.color(level.color_code()),
                record.payload_string()
            );
        }
        record.format_line()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.format_text(record);
        self.write_line(&output)
    }

    fn append_fallback(&mut self, error: &LoggerError) -> Result<()> {
        self.write_line(&format!("Error: {}", error))
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
