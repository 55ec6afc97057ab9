//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Example
//!
//! ```toml
//! database = "/usr/share/wnjpn/wnjpn.db"
//! policy = "strict"
//! statement_cache_capacity = 16
//! busy_timeout_ms = 5000
//! ```
//!
//! Every key is optional; unset keys fall back to the store defaults.
//! Unknown keys are rejected.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::store::ErrorPolicy;

/// Contents of a `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the lexicon database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Query failure policy ("strict" or "lenient")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<ErrorPolicy>,

    /// Prepared statement cache capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_cache_capacity: Option<usize>,

    /// Busy timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_timeout_ms: Option<u64>,
}

impl FileConfig {
    /// Keys accepted by [`FileConfig::get`] and [`FileConfig::set`].
    pub const KEYS: &'static [&'static str] = &[
        "database",
        "policy",
        "statement_cache_capacity",
        "busy_timeout_ms",
    ];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(database) = &self.database {
            if database.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "database cannot be empty".to_string(),
                ));
            }
        }

        if self.statement_cache_capacity == Some(0) {
            return Err(ConfigError::InvalidValue(
                "statement_cache_capacity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// The value of `key` as text, `None` when unset.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let value = match key {
            "database" => self.database.as_ref().map(|p| p.display().to_string()),
            "policy" => self.policy.map(|p| p.to_string()),
            "statement_cache_capacity" => self.statement_cache_capacity.map(|c| c.to_string()),
            "busy_timeout_ms" => self.busy_timeout_ms.map(|t| t.to_string()),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Parse `value` and store it under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "database" => self.database = Some(PathBuf::from(value)),
            "policy" => {
                self.policy = Some(value.parse().map_err(ConfigError::InvalidValue)?);
            }
            "statement_cache_capacity" => {
                self.statement_cache_capacity = Some(parse_number(key, value)?);
            }
            "busy_timeout_ms" => self.busy_timeout_ms = Some(parse_number(key, value)?),
            other => return Err(unknown_key(other)),
        }
        self.validate()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue(format!("{key} must be a number, got '{value}'")))
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::InvalidValue(format!(
        "unknown key '{}', must be one of: {}",
        key,
        FileConfig::KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FileConfig::default();
        assert!(config.database.is_none());
        assert!(config.policy.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_file() {
        let config: FileConfig = toml::from_str(
            r#"
            database = "/data/wnjpn.db"
            policy = "lenient"
            statement_cache_capacity = 4
            busy_timeout_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.database, Some(PathBuf::from("/data/wnjpn.db")));
        assert_eq!(config.policy, Some(ErrorPolicy::Lenient));
        assert_eq!(config.statement_cache_capacity, Some(4));
        assert_eq!(config.busy_timeout_ms, Some(250));
    }

    #[test]
    fn reject_unknown_fields() {
        let result: Result<FileConfig, _> = toml::from_str("cache = 3");
        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_policy() {
        let result: Result<FileConfig, _> = toml::from_str("policy = \"loose\"");
        assert!(result.is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = FileConfig {
            statement_cache_capacity: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_database_rejected() {
        let config = FileConfig {
            database: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn set_then_get() {
        let mut config = FileConfig::default();
        config.set("policy", "lenient").unwrap();
        config.set("busy_timeout_ms", "100").unwrap();
        assert_eq!(config.get("policy").unwrap().as_deref(), Some("lenient"));
        assert_eq!(config.get("busy_timeout_ms").unwrap().as_deref(), Some("100"));
        assert_eq!(config.get("database").unwrap(), None);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = FileConfig::default();
        assert!(config.set("statement_cache_capacity", "many").is_err());
        assert!(config.set("statement_cache_capacity", "0").is_err());
        assert!(config.set("policy", "sometimes").is_err());
        assert!(config.set("colour", "blue").is_err());
    }
}
