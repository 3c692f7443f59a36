//! core::errors
//!
//! Failures of a resolution call.
//!
//! A name that does not classify is not an error anywhere in the core; it
//! is simply left out of the catalog. Only the three outcomes below
//! terminate a call, and none of them is retried.
//!
//! # Example
//!
//! ```
//! use dirpick::core::errors::ResolveError;
//! use std::path::PathBuf;
//!
//! let err = ResolveError::NotFound { base: PathBuf::from("/srv/builds") };
//! assert!(err.to_string().contains("/srv/builds"));
//! assert_eq!(err.exit_code(), 5);
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors from building a catalog or resolving a mask against it.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The mask is not `latest` and is neither a date nor a version.
    #[error("invalid mask '{mask}': expected YYYY-MM-DD, a.b.c.d, or 'latest'")]
    InvalidMask { mask: String },

    /// The base directory is missing, not a directory, or cannot be listed.
    #[error("cannot read directory '{path}': {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The base directory has no date- or version-named children.
    #[error("no dated or versioned directories found in '{base}'")]
    NotFound { base: PathBuf },
}

impl ResolveError {
    /// Process exit status the binary reports for this failure.
    ///
    /// Starts at 3: clap exits with 2 on usage errors and the binary with 1
    /// on anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResolveError::InvalidMask { .. } => 3,
            ResolveError::DirectoryUnreadable { .. } => 4,
            ResolveError::NotFound { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let err = ResolveError::InvalidMask {
            mask: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));

        let err = ResolveError::DirectoryUnreadable {
            path: PathBuf::from("/nope"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            ResolveError::InvalidMask {
                mask: String::new(),
            }
            .exit_code(),
            ResolveError::DirectoryUnreadable {
                path: PathBuf::new(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .exit_code(),
            ResolveError::NotFound {
                base: PathBuf::new(),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [3, 4, 5]);
    }
}
