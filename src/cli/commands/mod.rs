//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Works out its base directory (see [`base_dir`])
//! 2. Calls into [`crate::core`]
//! 3. Formats and displays output
//!
//! Core errors are returned unwrapped so `main` can map
//! [`crate::core::errors::ResolveError`] to an exit status.

mod completion;
mod config_cmd;
mod init;
mod list;
mod resolve;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use init::init;
pub use list::list;
pub use resolve::{resolve, ResolveArgs};

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::paths::expand_base;
use crate::ui::output;

/// Environment variable supplying a default base directory.
pub const BASE_ENV: &str = "DIRPICK_BASE";

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Resolve {
            query,
            base,
            bootstrap,
            json,
            explain,
        } => resolve::resolve(
            ctx,
            &ResolveArgs {
                query,
                base,
                bootstrap,
                json,
                explain,
            },
        ),
        Command::List { base, json } => list::list(ctx, base.as_deref(), json),
        Command::Init { dir } => init::init(ctx, dir.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load the global config, with the error message naming the step.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    let config = Config::load().context("Failed to load config")?;
    match config.loaded_from() {
        Some(path) => output::debug(format!("config: {}", path.display()), ctx.verbosity()),
        None => output::debug("config: none found, using defaults", ctx.verbosity()),
    }
    Ok(config)
}

/// Pick and expand the base directory.
///
/// Precedence: `explicit` (flag or combined query), then `$DIRPICK_BASE`,
/// then the config `base`.
pub(crate) fn base_dir(explicit: Option<&str>, config: &Config) -> Result<PathBuf> {
    let from_env = std::env::var(BASE_ENV).ok().filter(|v| !v.trim().is_empty());

    let raw = match (explicit, from_env.as_deref(), config.base()) {
        (Some(raw), _, _) | (None, Some(raw), _) | (None, None, Some(raw)) => raw,
        (None, None, None) => bail!(
            "No base directory. Use BASE{}MASK, --base, ${} or set 'base' in the config file.",
            config.separator(),
            BASE_ENV
        ),
    };

    expand_base(raw).with_context(|| format!("Invalid base directory '{}'", raw))
}
