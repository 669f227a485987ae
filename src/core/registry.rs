//! Per-name logger cache with configuration inheritance
//!
//! A registry builds each named logger once, on first request, and applies
//! the configuration current at that moment. Later `configure` calls only
//! affect names that have not been requested yet.

use super::{
    appender::Appender,
    config::GlobalConfig,
    error::Result,
    log_level::Rank,
    logger::{Emitter, Logger},
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    config: RwLock<GlobalConfig>,
    emitter: Arc<Emitter>,
}

impl LoggerRegistry {
    /// Registry writing to the console with no configuration applied
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for LoggerRegistry
    ///
    /// # Example
    /// ```
    /// use ranked_logger::prelude::*;
    ///
    /// let registry = LoggerRegistry::builder()
    ///     .appender(MemoryAppender::new())
    ///     .config(GlobalConfig::new().with_default_logger_config(
    ///         LoggerConfig::new().with_min_level(Level::Debug).with_max_level(LEVEL_CRITICAL),
    ///     ))
    ///     .build();
    ///
    /// let logger = registry.get_logger("app");
    /// assert_eq!(logger.min_level(), LEVEL_DEBUG);
    /// ```
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Replace the configuration wholesale.
    ///
    /// Loggers that already exist keep their current window.
    pub fn configure(&self, config: GlobalConfig) {
        *self.config.write() = config;
    }

    /// Parse a JSON configuration and apply it with [`configure`](Self::configure)
    pub fn configure_from_json(&self, json: &str) -> Result<()> {
        self.configure(GlobalConfig::from_json_str(json)?);
        Ok(())
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> GlobalConfig {
        self.config.read().clone()
    }

    /// Return the logger for `name`, building and configuring it on first use.
    ///
    /// Concurrent first requests for one name yield the same instance.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::new(name, Arc::clone(&self.emitter)));
        self.config.read().effective_config_for(name).apply_to(&logger);
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// Whether a logger for `name` has been built
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.lock().contains_key(name)
    }

    /// Names of every logger built so far, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Resolve a level name, reporting unknown names and yielding `LEVEL_OFF`
    pub fn level_to_int(&self, name: &str) -> Rank {
        self.emitter.level_to_int(name)
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.emitter.add_appender(appender);
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.emitter.appender_names()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.emitter.metrics()
    }

    pub fn flush(&self) -> Result<()> {
        self.emitter.flush()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.logger_names())
            .field("appenders", &self.appender_names())
            .finish()
    }
}

/// Builder for constructing LoggerRegistry with a fluent API
pub struct RegistryBuilder {
    appenders: Vec<Box<dyn Appender>>,
    config: GlobalConfig,
    timestamp_format: TimestampFormat,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            appenders: Vec::new(),
            config: GlobalConfig::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Add an appender. Without any, the registry writes to the console.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: GlobalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn build(self) -> LoggerRegistry {
        let appenders = if self.appenders.is_empty() {
            vec![Box::new(ConsoleAppender::new()) as Box<dyn Appender>]
        } else {
            self.appenders
        };

        LoggerRegistry {
            loggers: Mutex::new(HashMap::new()),
            config: RwLock::new(self.config),
            emitter: Arc::new(Emitter::new(appenders, self.timestamp_format)),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry, created with console output on first use
pub fn global() -> &'static LoggerRegistry {
    static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();
    GLOBAL.get_or_init(LoggerRegistry::new)
}

/// Get a logger from the process-wide registry
pub fn get_logger(name: &str) -> Arc<Logger> {
    global().get_logger(name)
}

/// Replace the process-wide registry's configuration
pub fn configure(config: GlobalConfig) {
    global().configure(config);
}
