//! core::resolve
//!
//! Match a mask against a catalog.
//!
//! # Precedence
//!
//! 1. `latest` skips straight to step 4
//! 2. The mask is classified; if it is neither a date nor a version the
//!    call fails with [`ResolveError::InvalidMask`]
//! 3. Within the mask's variant: an exact match wins, otherwise the
//!    greatest entry strictly below the mask
//! 4. The greatest date if any dates exist, else the greatest version,
//!    else [`ResolveError::NotFound`]
//!
//! A mask with no predecessor is not a failure; it falls through to step 4.
//!
//! # Example
//!
//! ```
//! use dirpick::core::catalog::Catalog;
//! use dirpick::core::resolve::{resolve, Mask, MatchKind};
//! use std::path::Path;
//!
//! let catalog = Catalog::from_names(
//!     Path::new("/srv/builds"),
//!     ["41.1.102.0", "41.1.104.0", "41.1.104.1", "41.1.105.0"],
//! );
//!
//! let mask: Mask = "41.1.104.2".parse().unwrap();
//! let found = resolve(&catalog, &mask).unwrap();
//! assert_eq!(found.entry().name(), "41.1.104.1");
//! assert_eq!(found.kind(), MatchKind::Predecessor);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::catalog::{first_of_group, greatest, Catalog, CatalogEntry};
use super::errors::ResolveError;
use super::identifier::{classify, Identifier};

/// Sentinel mask that selects the latest entry.
pub const LATEST: &str = "latest";

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mask {
    /// The `latest` sentinel.
    Latest,
    /// A raw name to classify at resolution time.
    Named(String),
}

impl Mask {
    /// Build a mask from caller input.
    ///
    /// Surrounding whitespace is trimmed and `latest` is matched
    /// case-insensitively. Anything else is kept verbatim for the resolver
    /// to classify.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(LATEST) {
            Mask::Latest
        } else {
            Mask::Named(trimmed.to_string())
        }
    }
}

impl FromStr for Mask {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mask::new(s))
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mask::Latest => write!(f, "{}", LATEST),
            Mask::Named(name) => write!(f, "{}", name),
        }
    }
}

/// How a resolution was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// An entry equal to the mask.
    Exact,
    /// The greatest entry below the mask.
    Predecessor,
    /// The latest-entry fallback.
    Latest,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "exact match"),
            MatchKind::Predecessor => write!(f, "nearest earlier entry"),
            MatchKind::Latest => write!(f, "latest entry"),
        }
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    entry: CatalogEntry,
    kind: MatchKind,
}

impl Resolution {
    /// The chosen entry.
    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    /// How it was chosen.
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Absolute path of the chosen directory.
    pub fn path(&self) -> &Path {
        self.entry.path()
    }
}

/// Resolve `mask` against `catalog`.
///
/// Pure: the catalog is not modified and the same inputs always give the
/// same answer.
///
/// # Errors
///
/// - `ResolveError::InvalidMask` if a named mask does not classify
/// - `ResolveError::NotFound` if the catalog has no entries at all
pub fn resolve(catalog: &Catalog, mask: &Mask) -> Result<Resolution, ResolveError> {
    if let Mask::Named(raw) = mask {
        let target = classify(raw).ok_or_else(|| ResolveError::InvalidMask { mask: raw.clone() })?;

        if let Some(found) = nearest(catalog, &target) {
            debug!(%mask, name = found.entry.name(), kind = ?found.kind, "resolved");
            return Ok(found);
        }
        debug!(%mask, "no exact or earlier entry, falling back to latest");
    }

    let entry = catalog.latest().ok_or_else(|| ResolveError::NotFound {
        base: catalog.base().to_path_buf(),
    })?;
    debug!(%mask, name = entry.name(), "resolved to latest");

    Ok(Resolution {
        entry: entry.clone(),
        kind: MatchKind::Latest,
    })
}

/// Scan `base` and resolve `mask` against the result.
///
/// # Errors
///
/// Any error from [`Catalog::scan`] or [`resolve`].
pub fn resolve_in(base: &Path, mask: &Mask) -> Result<Resolution, ResolveError> {
    let catalog = Catalog::scan(base)?;
    resolve(&catalog, mask)
}

/// Exact match or nearest predecessor within the target's variant.
fn nearest(catalog: &Catalog, target: &Identifier) -> Option<Resolution> {
    let entries = catalog.entries(target.variant());

    if let Some(entry) = first_of_group(entries, target) {
        return Some(Resolution {
            entry: entry.clone(),
            kind: MatchKind::Exact,
        });
    }

    let below = entries.partition_point(|e| e.identifier() < target);
    greatest(&entries[..below]).map(|entry| Resolution {
        entry: entry.clone(),
        kind: MatchKind::Predecessor,
    })
}
