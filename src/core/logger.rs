//! Named logger implementation

use super::{
    appender::Appender,
    deep_clone::DeepClone,
    error::{LoggerError, Result},
    log_level::{level_to_int, Level, Rank, LEVEL_OFF},
    log_record::{LogRecord, CONTEXT_MARKER},
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
    value::Value,
};
use parking_lot::RwLock;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

/// Output side shared by every logger of a registry
pub(crate) struct Emitter {
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

thread_local! {
    /// Emitters currently calling appenders on this thread
    static ACTIVE_EMITTERS: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks an emitter busy on the current thread for as long as it lives.
///
/// An appender that logs through its own registry would otherwise try to
/// take the appender lock it is already running under.
struct ReentryGuard {
    addr: usize,
}

impl ReentryGuard {
    fn enter(emitter: &Emitter) -> Option<Self> {
        let addr = emitter as *const Emitter as usize;
        ACTIVE_EMITTERS.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&addr) {
                None
            } else {
                active.push(addr);
                Some(Self { addr })
            }
        })
    }
}

impl Drop for ReentryGuard {
    fn drop(&mut self) {
        ACTIVE_EMITTERS.with(|active| active.borrow_mut().retain(|&addr| addr != self.addr));
    }
}

fn panic_message(panic_info: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Emitter {
    pub(crate) fn new(appenders: Vec<Box<dyn Appender>>, timestamp_format: TimestampFormat) -> Self {
        Self {
            appenders: RwLock::new(appenders),
            timestamp_format,
            metrics: LoggerMetrics::new(),
        }
    }

    pub(crate) fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub(crate) fn appender_names(&self) -> Vec<String> {
        self.appenders
            .read()
            .iter()
            .map(|appender| appender.name().to_string())
            .collect()
    }

    pub(crate) fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub(crate) fn timestamp(&self) -> String {
        self.timestamp_format.now()
    }

    /// Resolve a level name, reporting unknown names and yielding `LEVEL_OFF`
    pub(crate) fn level_to_int(&self, name: &str) -> Rank {
        match level_to_int(name) {
            Ok(rank) => rank,
            Err(e) => {
                self.report_fallback(&e);
                LEVEL_OFF
            }
        }
    }

    fn report_fallback(&self, error: &LoggerError) {
        self.metrics.record_fallback();

        let Some(_guard) = ReentryGuard::enter(self) else {
            eprintln!("[LOGGER ERROR] {} (reported from inside an appender)", error);
            return;
        };
        let mut appenders = self.appenders.write();
        for (idx, appender) in appenders.iter_mut().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append_fallback(error)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender #{} fallback failed: {}", idx, e);
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked on fallback: {}",
                        idx,
                        panic_message(panic_info)
                    );
                }
            }
        }
    }

    /// Write a record to every appender with per-appender panic isolation.
    ///
    /// Returns `true` if any appender failed.
    pub(crate) fn emit(&self, record: &LogRecord) -> bool {
        let Some(_guard) = ReentryGuard::enter(self) else {
            eprintln!(
                "[LOGGER ERROR] Dropped {}.{} record logged from inside an appender",
                record.logger, record.level
            );
            self.metrics.record_dropped();
            return true;
        };

        let mut has_error = false;
        let mut appenders = self.appenders.write();

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(record)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender #{} failed: {}", idx, e);
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        panic_message(panic_info)
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_dropped();
        } else {
            self.metrics.record_emitted();
        }

        has_error
    }

    pub(crate) fn flush(&self) -> Result<()> {
        let Some(_guard) = ReentryGuard::enter(self) else {
            return Err(LoggerError::other("flush called from inside an appender"));
        };
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

/// A named logger with an inclusive `[min_level, max_level]` admission window.
///
/// Loggers are obtained from a [`LoggerRegistry`](crate::LoggerRegistry) and
/// start muted with both bounds at `LEVEL_OFF` until configuration is applied.
pub struct Logger {
    name: String,
    min_level: RwLock<Rank>,
    max_level: RwLock<Rank>,
    emitter: Arc<Emitter>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, emitter: Arc<Emitter>) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(LEVEL_OFF),
            max_level: RwLock::new(LEVEL_OFF),
            emitter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> Rank {
        *self.min_level.read()
    }

    pub fn max_level(&self) -> Rank {
        *self.max_level.read()
    }

    pub fn set_min_level(&self, level: impl Into<Rank>) -> &Self {
        *self.min_level.write() = level.into();
        self
    }

    pub fn set_max_level(&self, level: impl Into<Rank>) -> &Self {
        *self.max_level.write() = level.into();
        self
    }

    /// Whether a message of `rank` passes the window
    pub fn admits(&self, rank: Rank) -> bool {
        self.min_level() <= rank && rank <= self.max_level()
    }

    /// Resolve a level name to its rank.
    ///
    /// Unknown names produce one fallback diagnostic on the appenders and
    /// resolve to `LEVEL_OFF`.
    pub fn level_to_int(&self, level: &str) -> Rank {
        self.emitter.level_to_int(level)
    }

    pub fn log(&self, level: &str, message: impl Into<Value>) {
        self.dispatch(level, message.into(), None);
    }

    /// Log with a context value appended after a `"Context: "` marker
    pub fn log_with_context(&self, level: &str, message: impl Into<Value>, context: impl Into<Value>) {
        self.dispatch(level, message.into(), Some(context.into()));
    }

    fn dispatch(&self, level: &str, message: Value, context: Option<Value>) {
        let rank = self.level_to_int(level);
        // LEVEL_OFF is what unknown names resolve to; it never passes, even
        // when the window's upper bound is OFF itself
        if rank == LEVEL_OFF || !self.admits(rank) {
            self.emitter.metrics().record_filtered();
            return;
        }

        let mut payload = match message {
            Value::List(items) => items,
            other => vec![other],
        };
        let has_context = context.is_some();
        if let Some(context) = context {
            payload.push(Value::from(CONTEXT_MARKER));
            payload.push(context);
        }

        let record = LogRecord::new(
            self.name.as_str(),
            level,
            rank,
            self.emitter.timestamp(),
            payload.deep_clone(),
        )
        .with_context_flag(has_context);
        self.emitter.emit(&record);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<Value>) {
        self.log(Level::Critical.as_str(), message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<Value>) {
        self.log(Level::Error.as_str(), message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<Value>) {
        self.log(Level::Warning.as_str(), message);
    }

    #[inline]
    pub fn notice(&self, message: impl Into<Value>) {
        self.log(Level::Notice.as_str(), message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<Value>) {
        self.log(Level::Info.as_str(), message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<Value>) {
        self.log(Level::Debug.as_str(), message);
    }

    pub fn critical_with_context(&self, message: impl Into<Value>, context: impl Into<Value>) {
        self.log_with_context(Level::Critical.as_str(), message, context);
    }

    pub fn error_with_context(&self, message: impl Into<Value>, context: impl Into<Value>) {
        self.log_with_context(Level::Error.as_str(), message, context);
    }

    pub fn warning_with_context(&self, message: impl Into<Value>, context: impl Into<Value>) {
        self.log_with_context(Level::Warning.as_str(), message, context);
    }

    pub fn notice_with_context(&self, message: impl Into<Value>, context: impl Into<Value>) {
        self.log_with_context(Level::Notice.as_str(), message, context);
    }

    pub fn info_with_context(&self, message: impl Into<Value>, context: impl Into<Value>) {
        self.log_with_context(Level::Info.as_str(), message, context);
    }

    pub fn debug_with_context(&self, message: impl Into<Value>, context: impl Into<Value>) {
        self.log_with_context(Level::Debug.as_str(), message, context);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .field("max_level", &self.max_level())
            .finish()
    }
}
