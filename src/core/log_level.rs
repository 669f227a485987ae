//! Severity ranks and level names
//!
//! Ranks are plain integers where a smaller value is *less* severe:
//! `DEBUG` sits at 10000 and `CRITICAL` at 60000. Two sentinels bracket the
//! scale: `LEVEL_ALL` (everything passes) and `LEVEL_OFF` (disabled).

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Numeric severity rank
pub type Rank = i32;

pub const LEVEL_OFF: Rank = 120_000;
pub const LEVEL_CRITICAL: Rank = 60_000;
pub const LEVEL_ERROR: Rank = 50_000;
pub const LEVEL_WARNING: Rank = 40_000;
pub const LEVEL_NOTICE: Rank = 30_000;
pub const LEVEL_INFO: Rank = 20_000;
pub const LEVEL_DEBUG: Rank = 10_000;
pub const LEVEL_ALL: Rank = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Level {
    /// All named levels, most severe first
    pub const ALL: [Level; 6] = [
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    pub fn rank(&self) -> Rank {
        match self {
            Level::Critical => LEVEL_CRITICAL,
            Level::Error => LEVEL_ERROR,
            Level::Warning => LEVEL_WARNING,
            Level::Notice => LEVEL_NOTICE,
            Level::Info => LEVEL_INFO,
            Level::Debug => LEVEL_DEBUG,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Critical => BrightRed,
            Level::Error => Red,
            Level::Warning => Yellow,
            Level::Notice => Cyan,
            Level::Info => Green,
            Level::Debug => Blue,
        }
    }
}

impl From<Level> for Rank {
    fn from(level: Level) -> Self {
        level.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Case-sensitive: only the lowercase names are recognized.
    fn from_str(s: &str) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LoggerError::unrecognized_level(s))
    }
}

/// The immutable name to rank mapping, built on first use.
pub fn levels_map() -> &'static HashMap<&'static str, Rank> {
    static LEVELS_MAP: OnceLock<HashMap<&'static str, Rank>> = OnceLock::new();
    LEVELS_MAP.get_or_init(|| {
        Level::ALL
            .into_iter()
            .map(|level| (level.as_str(), level.rank()))
            .collect()
    })
}

/// Strict name lookup. The recovering variant that reports a fallback
/// diagnostic and yields `LEVEL_OFF` is `Logger::level_to_int`.
pub fn level_to_int(name: &str) -> Result<Rank> {
    levels_map()
        .get(name)
        .copied()
        .ok_or_else(|| LoggerError::unrecognized_level(name))
}

/// Resolve a rank constant by name, including the `off` and `all` sentinels.
///
/// Used by configuration parsing; matching is case-insensitive there because
/// configuration files are written by hand.
pub fn rank_from_name(name: &str) -> Option<Rank> {
    match name.to_ascii_lowercase().as_str() {
        "off" => Some(LEVEL_OFF),
        "all" => Some(LEVEL_ALL),
        other => levels_map().get(other).copied(),
    }
}
