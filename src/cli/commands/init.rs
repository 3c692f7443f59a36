//! init command - Create a base directory with sample subdirectories

use anyhow::{Context as _, Result};

use super::{base_dir, load_config};
use crate::cli::Context;
use crate::core::bootstrap::{self, Seeded, SAMPLE_NAMES};
use crate::ui::output;

/// Seed `dir` (or the configured base) with sample subdirectories.
///
/// An existing directory is left untouched and only a warning is printed.
pub fn init(ctx: &Context, dir: Option<&str>) -> Result<()> {
    let config = load_config(ctx)?;
    let base = base_dir(dir, &config)?;

    let seeded = bootstrap::seed(&base)
        .with_context(|| format!("Failed to create '{}'", base.display()))?;

    match seeded {
        Seeded::Created => output::print(
            format!(
                "Created {} sample directories in {}",
                SAMPLE_NAMES.len(),
                base.display()
            ),
            ctx.verbosity(),
        ),
        Seeded::AlreadyPresent => output::warn(
            format!("{} already exists; left unchanged", base.display()),
            ctx.verbosity(),
        ),
    }

    Ok(())
}
