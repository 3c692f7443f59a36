//! list command - Show the classified children of a base directory

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::{base_dir, load_config};
use crate::cli::Context;
use crate::core::catalog::{Catalog, CatalogEntry};
use crate::core::identifier::Variant;
use crate::ui::output;

/// JSON shape of one catalog entry.
#[derive(Debug, Serialize)]
struct EntryReport<'a> {
    name: &'a str,
    identifier: String,
    variant: Variant,
    path: &'a Path,
}

impl<'a> From<&'a CatalogEntry> for EntryReport<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            name: entry.name(),
            identifier: entry.identifier().to_string(),
            variant: entry.identifier().variant(),
            path: entry.path(),
        }
    }
}

/// JSON shape of a catalog.
#[derive(Debug, Serialize)]
struct CatalogReport<'a> {
    base: &'a Path,
    dates: Vec<EntryReport<'a>>,
    versions: Vec<EntryReport<'a>>,
}

/// List dates then versions, each ascending.
pub fn list(ctx: &Context, base: Option<&str>, json: bool) -> Result<()> {
    let config = load_config(ctx)?;
    let base = base_dir(base, &config)?;
    let catalog = Catalog::scan(&base)?;

    if json {
        let report = CatalogReport {
            base: catalog.base(),
            dates: catalog.dates().iter().map(EntryReport::from).collect(),
            versions: catalog.versions().iter().map(EntryReport::from).collect(),
        };
        output::result(serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if catalog.is_empty() {
        output::warn(
            format!(
                "no dated or versioned directories in '{}'",
                catalog.base().display()
            ),
            ctx.verbosity(),
        );
        return Ok(());
    }

    output::result(render(&catalog));
    Ok(())
}

/// Text rendering: a heading per non-empty variant, one entry per line.
fn render(catalog: &Catalog) -> String {
    let mut sections = Vec::new();
    for (heading, entries) in [("Dates:", catalog.dates()), ("Versions:", catalog.versions())] {
        if entries.is_empty() {
            continue;
        }
        let lines: Vec<String> = entries.iter().map(output::format_entry).collect();
        sections.push(format!("{}\n{}", heading, output::format_list(&lines, "  ")));
    }
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_groups_by_variant() {
        let catalog = Catalog::from_names(
            Path::new("/base"),
            ["41.1.105.0", "2016-05-17", "2015-09-15"],
        );

        let text = render(&catalog);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Dates:");
        assert!(lines[1].trim_start().starts_with("2015-09-15"));
        assert!(lines[2].trim_start().starts_with("2016-05-17"));
        assert_eq!(lines[3], "Versions:");
        assert!(lines[4].trim_start().starts_with("41.1.105.0"));
    }

    #[test]
    fn render_skips_empty_variant() {
        let catalog = Catalog::from_names(Path::new("/base"), ["41.1.105.0"]);
        let text = render(&catalog);
        assert!(!text.contains("Dates:"));
        assert!(text.starts_with("Versions:"));
    }
}
