//! # Ranked Logger
//!
//! A small leveled logging facade: named loggers filter messages by an
//! inclusive severity-rank window and write timestamped, deep-cloned payloads
//! to console-like appenders.
//!
//! ## Features
//!
//! - **Named Loggers**: one instance per name, built lazily by a registry
//! - **Inherited Configuration**: per-name settings fall back to defaults
//! - **Snapshot Payloads**: messages and context are deep-cloned before output
//! - **Thread Safe**: loggers and registries can be shared across threads
//!
//! ```
//! use ranked_logger::prelude::*;
//!
//! let memory = MemoryAppender::new();
//! let registry = LoggerRegistry::builder().appender(memory.clone()).build();
//!
//! let logger = registry.get_logger("app");
//! logger.warning_with_context("disk almost full", Value::object([("free_mb", 120)]));
//! logger.info("not shown: below the default NOTICE floor");
//!
//! assert_eq!(memory.len(), 1);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FnAppender, MemoryAppender};
    pub use crate::core::{
        Appender, ConfigKey, DeepClone, GlobalConfig, Key, Level, LogRecord, Logger,
        LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, Rank, RegistryBuilder, Result,
        Shared, TimestampFormat, Value, LEVEL_ALL, LEVEL_CRITICAL, LEVEL_DEBUG, LEVEL_ERROR,
        LEVEL_INFO, LEVEL_NOTICE, LEVEL_OFF, LEVEL_WARNING,
    };
}

pub use appenders::{ConsoleAppender, FnAppender, MemoryAppender};
pub use core::{
    configure, get_logger, global, level_to_int, levels_map, Appender, CloneMemo, ConfigKey,
    DeepClone, GlobalConfig, Key, Level, LogRecord, Logger, LoggerConfig, LoggerError,
    LoggerMetrics, LoggerRegistry, Rank, RegistryBuilder, Result, Shared, TimestampFormat, Value,
    CONTEXT_MARKER, LEVEL_ALL, LEVEL_CRITICAL, LEVEL_DEBUG, LEVEL_ERROR, LEVEL_INFO,
    LEVEL_NOTICE, LEVEL_OFF, LEVEL_WARNING,
};
