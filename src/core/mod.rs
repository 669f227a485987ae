//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod deep_clone;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod timestamp;
pub mod value;

pub use appender::Appender;
pub use config::{ConfigKey, GlobalConfig, LoggerConfig};
pub use deep_clone::{CloneMemo, DeepClone};
pub use error::{LoggerError, Result};
pub use log_level::{
    level_to_int, levels_map, Level, Rank, LEVEL_ALL, LEVEL_CRITICAL, LEVEL_DEBUG, LEVEL_ERROR,
    LEVEL_INFO, LEVEL_NOTICE, LEVEL_OFF, LEVEL_WARNING,
};
pub use log_record::{LogRecord, CONTEXT_MARKER};
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use registry::{configure, get_logger, global, LoggerRegistry, RegistryBuilder};
pub use timestamp::TimestampFormat;
pub use value::{Key, Shared, Value};
