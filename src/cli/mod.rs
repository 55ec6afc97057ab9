//! cli
//!
//! Command-line interface for wnj.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the database path and store options from flags and config
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI is a thin consumer of the public [`crate::store`] API. Handlers
//! open a store, run their lookups, render through [`crate::ui::output`],
//! and close the store.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};

use crate::core::config::Config;
use crate::store::{ErrorPolicy, WordNet};
use crate::ui::output::{self, Verbosity};

/// Global flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Database path override.
    pub db: Option<PathBuf>,
    /// Config file override.
    pub config: Option<PathBuf>,
    /// Force the lenient error policy.
    pub lenient: bool,
    /// Print JSON instead of text.
    pub json: bool,
    /// Debug output enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity from the quiet and debug flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load configuration, reporting load warnings.
    pub fn load_config(&self) -> Result<Config> {
        let result = Config::load(self.config.as_deref()).context("Failed to load config")?;
        for warning in &result.warnings {
            output::warn(
                format!("{} ({})", warning.message, warning.path.display()),
                self.verbosity(),
            );
        }
        if let Some(path) = result.config.loaded_from() {
            output::debug(
                format!("loaded config from {}", path.display()),
                self.verbosity(),
            );
        }
        Ok(result.config)
    }

    /// Open the store described by the flags and config.
    ///
    /// `--db` overrides the configured database and `--lenient` overrides
    /// the configured policy.
    pub fn open_store(&self) -> Result<WordNet> {
        let config = self.load_config()?;

        let path: &Path = match (&self.db, config.database()) {
            (Some(db), _) => db.as_path(),
            (None, Some(db)) => db,
            (None, None) => {
                return Err(anyhow!(
                    "No database configured. Pass --db <PATH> or run 'wnj config set database <PATH>'."
                ))
            }
        };

        let mut options = config.store_options();
        if self.lenient {
            options = options.with_policy(ErrorPolicy::Lenient);
        }

        output::debug(
            format!("opening {} ({} policy)", path.display(), options.policy),
            self.verbosity(),
        );
        WordNet::open_with(path, options)
            .with_context(|| format!("Failed to open database '{}'", path.display()))
    }
}

/// Run `f` against a freshly opened store, then close it.
pub(crate) fn with_store<T>(ctx: &Context, f: impl FnOnce(&WordNet) -> Result<T>) -> Result<T> {
    let wn = ctx.open_store()?;
    let result = f(&wn);
    let closed = wn.close();
    let value = result?;
    closed.context("Failed to close database")?;
    Ok(value)
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        db: cli.db.clone(),
        config: cli.config.clone(),
        lenient: cli.lenient,
        json: cli.json,
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
