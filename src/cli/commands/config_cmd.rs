//! config command - Get, set, or list configuration values

use anyhow::{bail, Context as _, Result};

use super::load_config;
use crate::cli::Context;
use crate::core::config::{Config, GlobalConfig};
use crate::ui::output;

/// Keys understood by `config get` and `config set`.
const KEYS: [&str; 3] = ["base", "separator", "bootstrap"];

/// Get a configuration value.
///
/// Prints nothing if the key is valid but unset.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = load_config(ctx)?;

    if let Some(value) = lookup(&config.global, key)? {
        output::result(value);
    }
    Ok(())
}

/// Set a configuration value and write the config file.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let config = load_config(ctx)?;
    let path = match config.loaded_from() {
        Some(path) => path.to_path_buf(),
        None => Config::write_path().context("Failed to locate config file")?,
    };

    let mut global = config.global;
    assign(&mut global, key, value)?;

    Config::write_to(&path, &global).context("Failed to write config")?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity());
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;

    match config.loaded_from() {
        Some(path) => output::result(format!("# {}", path.display())),
        None => output::result("# (no config file; defaults)"),
    }

    for key in KEYS {
        let value = lookup(&config.global, key)?.unwrap_or_else(|| "(not set)".to_string());
        output::result(format!("{} = {}", key, value));
    }
    Ok(())
}

/// Read one key as display text.
fn lookup(global: &GlobalConfig, key: &str) -> Result<Option<String>> {
    let value = match key {
        "base" => global.base.clone(),
        "separator" => global.separator.map(|c| c.to_string()),
        "bootstrap" => global.bootstrap.map(|b| b.to_string()),
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    };
    Ok(value)
}

/// Parse `value` and store it under `key`.
fn assign(global: &mut GlobalConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "base" => global.base = Some(value.to_string()),
        "separator" => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => global.separator = Some(c),
                _ => bail!("Separator must be a single character, got '{}'", value),
            }
        }
        "bootstrap" => {
            global.bootstrap = Some(
                value
                    .parse()
                    .with_context(|| format!("Expected true or false, got '{}'", value))?,
            )
        }
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    }
    Ok(())
}
