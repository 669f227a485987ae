//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The formatted
//! string becomes a one-element payload.
//!
//! # Examples
//!
//! ```
//! use ranked_logger::prelude::*;
//! use ranked_logger::notice;
//!
//! let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build();
//! let logger = registry.get_logger("server");
//!
//! // Basic logging
//! notice!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! notice!(logger, "Server listening on port {}", port);
//! ```

/// Log a formatted message under a level name.
///
/// # Examples
///
/// ```
/// # use ranked_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build();
/// # let logger = registry.get_logger("app");
/// use ranked_logger::log;
/// log!(logger, "notice", "Simple message");
/// log!(logger, "error", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a critical-level message.
///
/// ```
/// # use ranked_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build();
/// # let logger = registry.get_logger("app");
/// use ranked_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "critical", $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use ranked_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build();
/// # let logger = registry.get_logger("app");
/// use ranked_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "error", $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "warning", $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "notice", $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "info", $($arg)+)
    };
}

/// Log a debug-level message.
///
/// ```
/// # use ranked_logger::prelude::*;
/// # let registry = LoggerRegistry::builder().appender(MemoryAppender::new()).build();
/// # let logger = registry.get_logger("app");
/// use ranked_logger::debug;
/// logger.set_min_level(Level::Debug);
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, "debug", $($arg)+)
    };
}
