//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. A
//! resolved path is a result, not chatter, so it is printed even in quiet
//! mode; see [`result`].

use std::fmt::Display;

use crate::core::catalog::CatalogEntry;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a command result (always shown).
pub fn result(message: impl Display) {
    println!("{}", message);
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print supplementary information to stderr (respects quiet mode).
///
/// Keeps stdout to the result alone so it can be captured by scripts.
pub fn note(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a catalog entry as `identifier  path`.
///
/// The identifier column is padded to line up common names; longer ones
/// still get a gap before the path.
pub fn format_entry(entry: &CatalogEntry) -> String {
    format!("{:<11} {}", entry.identifier().to_string(), entry.path().display())
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use std::path::Path;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn entry_aligns_identifier() {
        let catalog = Catalog::from_names(Path::new("/base"), ["41.1.104.1"]);
        let line = format_entry(&catalog.versions()[0]);
        assert!(line.starts_with("41.1.104.1  "));
        assert!(line.ends_with("41.1.104.1"));
    }

    #[test]
    fn long_identifier_keeps_a_gap() {
        let catalog = Catalog::from_names(Path::new("/base"), ["41.1.104.100"]);
        let line = format_entry(&catalog.versions()[0]);
        assert_eq!(line, "41.1.104.100 /base/41.1.104.100");
    }

    #[test]
    fn list_prefixes_each_item() {
        assert_eq!(format_list(&["a", "b"], "  "), "  a\n  b");
    }
}
