//! core::bootstrap
//!
//! First-run seeding of a base directory with sample children.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Children created by [`seed`].
pub const SAMPLE_NAMES: [&str; 10] = [
    "2015-09-15",
    "2015-09-20",
    "2015-10-10",
    "2015-12-13",
    "2016-05-17",
    "41.1.102.0",
    "41.1.103.0",
    "41.1.104.0",
    "41.1.104.1",
    "41.1.105.0",
];

/// Errors from seeding.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to create '{path}': {source}")]
    CreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What [`seed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeded {
    /// The base was missing and has been created with sample children.
    Created,
    /// The base already existed and was left alone.
    AlreadyPresent,
}

/// Create `base` and the sample children if `base` does not exist.
///
/// An existing base is never touched, even if it is empty.
///
/// # Errors
///
/// Returns `BootstrapError::CreateFailed` naming the first path that could
/// not be created.
pub fn seed(base: &Path) -> Result<Seeded, BootstrapError> {
    if base.exists() {
        return Ok(Seeded::AlreadyPresent);
    }

    for name in SAMPLE_NAMES {
        let path = base.join(name);
        fs::create_dir_all(&path).map_err(|source| BootstrapError::CreateFailed {
            path: path.clone(),
            source,
        })?;
    }
    debug!(base = %base.display(), count = SAMPLE_NAMES.len(), "seeded sample directories");

    Ok(Seeded::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_base() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("Test");

        assert_eq!(seed(&base).unwrap(), Seeded::Created);

        let catalog = Catalog::scan(&base).unwrap();
        assert_eq!(catalog.dates().len(), 5);
        assert_eq!(catalog.versions().len(), 5);
    }

    #[test]
    fn leaves_existing_base_alone() {
        let temp = TempDir::new().unwrap();

        assert_eq!(seed(temp.path()).unwrap(), Seeded::AlreadyPresent);
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn reports_uncreatable_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = seed(&blocker.join("Test")).unwrap_err();
        assert!(err.to_string().contains("failed to create"));
    }
}
