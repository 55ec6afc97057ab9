//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Store defaults
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, the first existing file wins:
//! 1. An explicit path (`--config`)
//! 2. `$WNJ_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/wnj/config.toml`
//! 4. `~/.wnj/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use wnj::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! if let Some(db) = config.database() {
//!     println!("Database: {}", db.display());
//! }
//! println!("Policy: {}", config.policy());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::store::{ErrorPolicy, StoreOptions};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "WNJ_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaults applied by its accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File contents (all defaults when no file was found)
    pub file: FileConfig,
    /// Path the file was loaded from
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `explicit` or the default locations.
    ///
    /// An explicit path that does not exist yields defaults and a warning,
    /// so `config set` can create it.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing files are not an error.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let found = match explicit {
            Some(path) if path.exists() => Some(path.to_path_buf()),
            Some(path) => {
                warnings.push(ConfigWarning {
                    message: "config file does not exist, using defaults".to_string(),
                    path: path.to_path_buf(),
                });
                None
            }
            None => Self::search_paths().into_iter().find(|p| p.exists()),
        };

        let file = match &found {
            Some(path) => Self::read_file(path)?,
            None => FileConfig::default(),
        };
        file.validate()?;

        Ok(ConfigLoadResult {
            config: Config {
                file,
                loaded_from: found,
            },
            warnings,
        })
    }

    /// Candidate locations, in search order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                paths.push(PathBuf::from(path));
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg_home.is_empty() {
                paths.push(PathBuf::from(xdg_home).join("wnj/config.toml"));
            }
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".wnj/config.toml"));
        }

        paths
    }

    /// Read and parse a config file.
    pub fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical write path, `~/.wnj/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".wnj/config.toml"))
    }

    /// Where a write should go: the loaded file, else the canonical path.
    pub fn write_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.loaded_from {
            Some(path) => Ok(path.clone()),
            None => Self::default_config_path(),
        }
    }

    /// Write `file` to `path` atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, then renames it over the target.
    pub fn write_file(path: &Path, file: &FileConfig) -> Result<(), ConfigError> {
        file.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(file).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut out = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        out.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        out.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessors with defaults
    // =========================================================================

    /// The configured database path, if any.
    pub fn database(&self) -> Option<&Path> {
        self.file.database.as_deref()
    }

    /// Query failure policy. Defaults to strict.
    pub fn policy(&self) -> ErrorPolicy {
        self.file.policy.unwrap_or_default()
    }

    /// Statement cache capacity. Defaults to one slot per query shape.
    pub fn statement_cache_capacity(&self) -> usize {
        self.file
            .statement_cache_capacity
            .unwrap_or(StoreOptions::DEFAULT_STATEMENT_CACHE_CAPACITY)
    }

    /// Busy timeout. Defaults to 5 seconds.
    pub fn busy_timeout(&self) -> Duration {
        self.file
            .busy_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(StoreOptions::DEFAULT_BUSY_TIMEOUT)
    }

    /// Store options described by this configuration.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::default()
            .with_policy(self.policy())
            .with_statement_cache_capacity(self.statement_cache_capacity())
            .with_busy_timeout(self.busy_timeout())
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert!(config.database().is_none());
        assert_eq!(config.policy(), ErrorPolicy::Strict);
        assert_eq!(config.statement_cache_capacity(), 16);
        assert_eq!(config.busy_timeout(), Duration::from_millis(5000));
        assert_eq!(config.store_options(), StoreOptions::default());
    }

    #[test]
    fn load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            database = "/data/wnjpn.db"
            policy = "lenient"
            statement_cache_capacity = 2
            "#,
        )
        .unwrap();

        let result = Config::load(Some(&path)).unwrap();
        let config = result.config;

        assert_eq!(config.loaded_from(), Some(path.as_path()));
        assert_eq!(config.database(), Some(Path::new("/data/wnjpn.db")));
        let options = config.store_options();
        assert_eq!(options.policy, ErrorPolicy::Lenient);
        assert_eq!(options.statement_cache_capacity, 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn missing_explicit_file_warns() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let result = Config::load(Some(&path)).unwrap();

        assert!(result.config.loaded_from().is_none());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, path);
    }

    #[test]
    fn invalid_file_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "statement_cache_capacity = 0").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unparseable_file_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "policy = [").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn write_file_atomic() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let file = FileConfig {
            policy: Some(ErrorPolicy::Lenient),
            busy_timeout_ms: Some(50),
            ..Default::default()
        };
        Config::write_file(&path, &file).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(Config::read_file(&path).unwrap(), file);
    }
}
