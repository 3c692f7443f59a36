//! resolve command - Print the subdirectory that best matches a mask

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::{base_dir, load_config};
use crate::cli::Context;
use crate::core::bootstrap::{self, Seeded};
use crate::core::config::Config;
use crate::core::identifier::Variant;
use crate::core::paths::split_query;
use crate::core::resolve::{resolve_in, Mask, MatchKind, Resolution};
use crate::ui::output;

/// Arguments of `dirpick resolve`.
#[derive(Debug, Clone, Default)]
pub struct ResolveArgs {
    /// `BASE|MASK` or a bare mask
    pub query: String,
    /// `--base`
    pub base: Option<String>,
    /// `--bootstrap`
    pub bootstrap: bool,
    /// `--json`
    pub json: bool,
    /// `--explain`
    pub explain: bool,
}

/// JSON shape of a resolution.
#[derive(Debug, Serialize)]
struct Report<'a> {
    path: &'a Path,
    name: &'a str,
    identifier: String,
    variant: Variant,
    kind: MatchKind,
}

impl<'a> From<&'a Resolution> for Report<'a> {
    fn from(found: &'a Resolution) -> Self {
        let entry = found.entry();
        Self {
            path: entry.path(),
            name: entry.name(),
            identifier: entry.identifier().to_string(),
            variant: entry.identifier().variant(),
            kind: found.kind(),
        }
    }
}

/// Resolve a query and print the chosen path.
pub fn resolve(ctx: &Context, args: &ResolveArgs) -> Result<()> {
    let config = load_config(ctx)?;
    let found = resolve_query(&config, args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&Report::from(&found))?;
        output::result(json);
        return Ok(());
    }

    output::result(found.path().display());
    if args.explain {
        output::note(
            format!(
                "{} ({}) for '{}'",
                found.entry().name(),
                found.kind(),
                args.query
            ),
            ctx.verbosity(),
        );
    }
    Ok(())
}

/// Split the query, expand the base, seed if asked, and resolve.
///
/// `ResolveError`s are returned as-is so the exit status can be derived
/// from them.
pub(crate) fn resolve_query(config: &Config, args: &ResolveArgs) -> Result<Resolution> {
    let separator = config.separator();

    let (explicit_base, raw_mask) = if args.query.contains(separator) {
        let (base, mask) = split_query(&args.query, separator)?;
        (Some(base), mask)
    } else {
        (args.base.as_deref(), args.query.as_str())
    };

    let base = base_dir(explicit_base, config)?;

    if args.bootstrap || config.bootstrap() {
        let seeded = bootstrap::seed(&base)
            .with_context(|| format!("Failed to bootstrap '{}'", base.display()))?;
        if seeded == Seeded::Created {
            tracing::info!(base = %base.display(), "created sample directories");
        }
    }

    Ok(resolve_in(&base, &Mask::new(raw_mask))?)
}
