//! core::catalog
//!
//! One scan of a base directory, classified and partitioned.
//!
//! # Scan order
//!
//! Child names are sorted by name before classification, and each subset
//! is then stably sorted by identifier. When two names classify to equal
//! identifiers (`41.01.0.0` and `41.1.0.0`), the one that sorts first by
//! name is the one the resolver picks.
//!
//! # Example
//!
//! ```
//! use dirpick::core::catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::from_names(
//!     Path::new("/srv/builds"),
//!     ["2015-09-15", "41.1.104.1", "notes", "2016-05-17"],
//! );
//!
//! assert_eq!(catalog.dates().len(), 2);
//! assert_eq!(catalog.versions().len(), 1);
//! assert_eq!(catalog.latest().unwrap().name(), "2016-05-17");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::ResolveError;
use super::identifier::{classify, Identifier, Variant};

/// A classified child directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    identifier: Identifier,
    name: String,
    path: PathBuf,
}

impl CatalogEntry {
    /// The parsed identifier.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// The child name as it appeared on disk.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the child directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Classified children of one base directory at one scan instant.
///
/// # Invariants
///
/// - `dates` holds only `Identifier::Date`, `versions` only
///   `Identifier::Version`
/// - Both are sorted ascending by identifier, ties in scan order
/// - Never mutated after construction
#[derive(Debug, Clone)]
pub struct Catalog {
    base: PathBuf,
    dates: Vec<CatalogEntry>,
    versions: Vec<CatalogEntry>,
}

impl Catalog {
    /// List and classify the immediate child directories of `base`.
    ///
    /// Files are ignored, symlinks to directories are included, and names
    /// that are not valid UTF-8 or do not classify are dropped. A relative
    /// `base` is made absolute against the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::DirectoryUnreadable` if `base` does not exist,
    /// is not a directory, or cannot be listed.
    pub fn scan(base: &Path) -> Result<Self, ResolveError> {
        let unreadable = |source| ResolveError::DirectoryUnreadable {
            path: base.to_path_buf(),
            source,
        };

        let base = std::path::absolute(base).map_err(unreadable)?;
        let entries = fs::read_dir(&base).map_err(unreadable)?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(unreadable)?;
            if !is_child_dir(&entry).map_err(unreadable)? {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(name = ?raw, "skipping non-UTF-8 directory name"),
            }
        }
        names.sort();

        let catalog = Self::from_names(&base, names);
        debug!(
            base = %catalog.base.display(),
            dates = catalog.dates.len(),
            versions = catalog.versions.len(),
            "scanned catalog"
        );
        Ok(catalog)
    }

    /// Build a catalog from child names without touching the filesystem.
    ///
    /// `names` are taken in the order given; that order is the tie-break
    /// order for equal identifiers.
    pub fn from_names<I, S>(base: &Path, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dates = Vec::new();
        let mut versions = Vec::new();

        for name in names {
            let name = name.into();
            let Some(identifier) = classify(&name) else {
                debug!(%name, "unclassified directory name");
                continue;
            };
            let entry = CatalogEntry {
                identifier,
                path: base.join(&name),
                name,
            };
            match identifier.variant() {
                Variant::Date => dates.push(entry),
                Variant::Version => versions.push(entry),
            }
        }

        // Stable, so equal identifiers keep scan order.
        dates.sort_by(compare_entries);
        versions.sort_by(compare_entries);

        Self {
            base: base.to_path_buf(),
            dates,
            versions,
        }
    }

    /// The scanned base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Date entries, ascending.
    pub fn dates(&self) -> &[CatalogEntry] {
        &self.dates
    }

    /// Version entries, ascending.
    pub fn versions(&self) -> &[CatalogEntry] {
        &self.versions
    }

    /// Entries of one variant, ascending.
    pub fn entries(&self, variant: Variant) -> &[CatalogEntry] {
        match variant {
            Variant::Date => &self.dates,
            Variant::Version => &self.versions,
        }
    }

    /// Total number of classified entries.
    pub fn len(&self) -> usize {
        self.dates.len() + self.versions.len()
    }

    /// True if no child classified.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.versions.is_empty()
    }

    /// The latest entry: the greatest date if any dates exist, otherwise
    /// the greatest version.
    pub fn latest(&self) -> Option<&CatalogEntry> {
        greatest(&self.dates).or_else(|| greatest(&self.versions))
    }
}

/// Whether a child is a directory or a symlink to one.
///
/// Only symlinks need a second `stat`; a dangling link is not a directory.
fn is_child_dir(entry: &fs::DirEntry) -> std::io::Result<bool> {
    let file_type = entry.file_type()?;
    if file_type.is_symlink() {
        return Ok(fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir()));
    }
    Ok(file_type.is_dir())
}

/// Order entries of the same variant by identifier.
fn compare_entries(a: &CatalogEntry, b: &CatalogEntry) -> std::cmp::Ordering {
    a.identifier
        .cmp_same_variant(&b.identifier)
        .unwrap_or(std::cmp::Ordering::Equal)
}

/// First entry of the greatest equal group in a sorted slice.
pub(crate) fn greatest(entries: &[CatalogEntry]) -> Option<&CatalogEntry> {
    let last = entries.last()?;
    first_of_group(entries, &last.identifier)
}

/// First entry whose identifier equals `identifier` in a sorted slice.
pub(crate) fn first_of_group<'a>(
    entries: &'a [CatalogEntry],
    identifier: &Identifier,
) -> Option<&'a CatalogEntry> {
    let start = entries.partition_point(|e| e.identifier < *identifier);
    entries
        .get(start)
        .filter(|e| e.identifier == *identifier)
}
