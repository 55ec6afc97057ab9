//! config command - Get, set, list, or locate configuration values

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::{Config, FileConfig};
use crate::ui::output;

/// Print a configuration value. Unset keys print nothing.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = ctx.load_config()?;
    if let Some(value) = config.file.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value and write the file atomically.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let path = match &ctx.config {
        Some(path) => path.clone(),
        None => config.write_path()?,
    };

    let mut file = config.file.clone();
    file.set(key, value)?;
    Config::write_file(&path, &file)
        .with_context(|| format!("Failed to write config to '{}'", path.display()))?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity());
    Ok(())
}

/// List every key with its effective value.
pub fn list(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    if ctx.json {
        output::json(&config.file)?;
        return Ok(());
    }

    match config.loaded_from() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# defaults (no config file)"),
    }
    for key in FileConfig::KEYS {
        let value = config.file.get(key)?;
        println!(
            "{} = {}",
            key,
            value.unwrap_or_else(|| default_value(&config, key))
        );
    }
    Ok(())
}

/// Print the file that was loaded, or the one `config set` would create.
pub fn path(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let path = match &ctx.config {
        Some(path) => path.clone(),
        None => config.write_path()?,
    };
    println!("{}", path.display());
    Ok(())
}

fn default_value(config: &Config, key: &str) -> String {
    match key {
        "policy" => format!("{} (default)", config.policy()),
        "statement_cache_capacity" => format!("{} (default)", config.statement_cache_capacity()),
        "busy_timeout_ms" => format!("{} (default)", config.busy_timeout().as_millis()),
        _ => "(not set)".to_string(),
    }
}
