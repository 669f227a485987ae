//! Logger configuration
//!
//! The JSON form mirrors the in-memory structure:
//!
//! ```json
//! {
//!   "defaultLoggerConfig": { "minLevel": "notice", "maxLevel": "off" },
//!   "loggers": { "db": { "minLevel": 10000 } }
//! }
//! ```
//!
//! Rank fields accept an integer or a level name. No range checks are made;
//! an odd window just filters oddly.

use super::error::{LoggerError, Result};
use super::log_level::{rank_from_name, Rank, LEVEL_NOTICE};
use super::logger::Logger;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Configuration keys that map onto a logger setter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    MinLevel,
    MaxLevel,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::MinLevel, ConfigKey::MaxLevel];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::MinLevel => "minLevel",
            ConfigKey::MaxLevel => "maxLevel",
        }
    }

    /// Invoke the setter this key stands for
    pub fn apply(&self, logger: &Logger, value: Rank) {
        match self {
            ConfigKey::MinLevel => logger.set_min_level(value),
            ConfigKey::MaxLevel => logger.set_max_level(value),
        };
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| LoggerError::config("LoggerConfig", format!("unknown key '{}'", s)))
    }
}

/// Per-logger settings; unset fields are filled from the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(
        default,
        deserialize_with = "deserialize_rank",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_level: Option<Rank>,
    #[serde(
        default,
        deserialize_with = "deserialize_rank",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_level: Option<Rank>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Used when no default logger config was supplied: `minLevel` is NOTICE
    /// and `maxLevel` is left unset, so a logger keeps its constructed OFF.
    pub fn builtin_default() -> Self {
        Self {
            min_level: Some(LEVEL_NOTICE),
            max_level: None,
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: impl Into<Rank>) -> Self {
        self.min_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_max_level(mut self, level: impl Into<Rank>) -> Self {
        self.max_level = Some(level.into());
        self
    }

    pub fn get(&self, key: ConfigKey) -> Option<Rank> {
        match key {
            ConfigKey::MinLevel => self.min_level,
            ConfigKey::MaxLevel => self.max_level,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: Option<Rank>) {
        match key {
            ConfigKey::MinLevel => self.min_level = value,
            ConfigKey::MaxLevel => self.max_level = value,
        }
    }

    /// Set a field by its configuration key string
    pub fn set_by_key(&mut self, key: &str, value: impl Into<Rank>) -> Result<()> {
        let key: ConfigKey = key.parse()?;
        self.set(key, Some(value.into()));
        Ok(())
    }

    /// Present keys with their values
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, Rank)> + '_ {
        ConfigKey::ALL
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    /// Copy every key set in `defaults` but unset here. One level deep.
    #[must_use]
    pub fn merged_with(&self, defaults: &LoggerConfig) -> LoggerConfig {
        let mut merged = self.clone();
        for (key, value) in defaults.entries() {
            if merged.get(key).is_none() {
                merged.set(key, Some(value));
            }
        }
        merged
    }

    /// Apply every present key through its setter
    pub fn apply_to(&self, logger: &Logger) {
        for (key, value) in self.entries() {
            key.apply(logger, value);
        }
    }
}

/// Process-wide configuration, replaced wholesale by `configure`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_logger_config: Option<LoggerConfig>,
    #[serde(default)]
    pub loggers: HashMap<String, LoggerConfig>,
}

impl GlobalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_logger_config(mut self, config: LoggerConfig) -> Self {
        self.default_logger_config = Some(config);
        self
    }

    #[must_use]
    pub fn with_logger(mut self, name: impl Into<String>, config: LoggerConfig) -> Self {
        self.loggers.insert(name.into(), config);
        self
    }

    /// The configured default, or the built-in one when none was given
    pub fn default_logger_config(&self) -> LoggerConfig {
        self.default_logger_config
            .clone()
            .unwrap_or_else(LoggerConfig::builtin_default)
    }

    /// Configuration a newly built logger named `name` receives
    pub fn effective_config_for(&self, name: &str) -> LoggerConfig {
        let defaults = self.default_logger_config();
        match self.loggers.get(name) {
            Some(own) => own.merged_with(&defaults),
            None => defaults,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }
}

fn deserialize_rank<'de, D>(deserializer: D) -> std::result::Result<Option<Rank>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RankSpec {
        Rank(Rank),
        Name(String),
    }

    match Option::<RankSpec>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RankSpec::Rank(rank)) => Ok(Some(rank)),
        Some(RankSpec::Name(name)) => rank_from_name(&name).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("Unknown logger level '{}'", name))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::{Level, LEVEL_DEBUG, LEVEL_OFF, LEVEL_WARNING};

    #[test]
    fn test_builtin_default_leaves_max_unset() {
        let config = LoggerConfig::builtin_default();
        assert_eq!(config.min_level, Some(LEVEL_NOTICE));
        assert_eq!(config.max_level, None);
    }

    #[test]
    fn test_merge_fills_gaps_only() {
        let defaults = LoggerConfig::new()
            .with_min_level(Level::Notice)
            .with_max_level(LEVEL_OFF);
        let own = LoggerConfig::new().with_min_level(Level::Debug);

        let merged = own.merged_with(&defaults);
        assert_eq!(merged.min_level, Some(LEVEL_DEBUG));
        assert_eq!(merged.max_level, Some(LEVEL_OFF));
        // The per-name entry itself is untouched
        assert_eq!(own.max_level, None);
    }

    #[test]
    fn test_effective_config_for() {
        let config = GlobalConfig::new()
            .with_default_logger_config(LoggerConfig::new().with_max_level(Level::Critical))
            .with_logger("db", LoggerConfig::new().with_min_level(Level::Warning));

        let db = config.effective_config_for("db");
        assert_eq!(db.min_level, Some(LEVEL_WARNING));
        assert_eq!(db.max_level, Some(Level::Critical.rank()));

        let other = config.effective_config_for("http");
        assert_eq!(other.min_level, None);
        assert_eq!(other.max_level, Some(Level::Critical.rank()));
    }

    #[test]
    fn test_missing_default_uses_builtin() {
        let config = GlobalConfig::new().with_logger("db", LoggerConfig::new());
        assert_eq!(
            config.effective_config_for("db"),
            LoggerConfig::builtin_default()
        );
        assert_eq!(
            GlobalConfig::new().effective_config_for("any"),
            LoggerConfig::builtin_default()
        );
    }

    #[test]
    fn test_config_key_dispatch() {
        assert_eq!("minLevel".parse::<ConfigKey>().unwrap(), ConfigKey::MinLevel);
        assert_eq!("maxLevel".parse::<ConfigKey>().unwrap(), ConfigKey::MaxLevel);
        assert!("MinLevel".parse::<ConfigKey>().is_err());

        let mut config = LoggerConfig::new();
        config.set_by_key("maxLevel", Level::Error).unwrap();
        assert_eq!(config.max_level, Some(Level::Error.rank()));

        let err = config.set_by_key("colour", 1).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_json_accepts_ranks_and_names() {
        let config = GlobalConfig::from_json_str(
            r#"{
                "defaultLoggerConfig": { "minLevel": "warning", "maxLevel": 120000 },
                "loggers": { "db": { "minLevel": "DEBUG" } }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.default_logger_config,
            Some(LoggerConfig {
                min_level: Some(LEVEL_WARNING),
                max_level: Some(LEVEL_OFF),
            })
        );
        assert_eq!(config.loggers["db"].min_level, Some(LEVEL_DEBUG));
    }

    #[test]
    fn test_from_json_rejects_unknown_input() {
        assert!(GlobalConfig::from_json_str(r#"{"loggers": {"a": {"colour": 1}}}"#).is_err());
        assert!(
            GlobalConfig::from_json_str(r#"{"defaultLoggerConfig": {"minLevel": "loud"}}"#)
                .is_err()
        );
    }

    #[test]
    fn test_json_roundtrip_keeps_key_names() {
        let config = GlobalConfig::new()
            .with_default_logger_config(LoggerConfig::builtin_default());
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"defaultLoggerConfig":{"minLevel":30000},"loggers":{}}"#);
    }
}
