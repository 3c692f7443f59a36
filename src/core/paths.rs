//! core::paths
//!
//! Turning caller input into a base directory and a mask.
//!
//! # Query form
//!
//! A query may carry both halves as `BASE|MASK`. The split happens at the
//! last separator; exactly one separator must be present.
//!
//! # Expansion
//!
//! Base paths are expanded before use:
//! - `~` or `~/...` at the start becomes the home directory
//! - `$VAR` and `${VAR}` are replaced from the environment
//! - `%VAR%` is replaced from the environment
//!
//! A reference to an unset variable is an error rather than an empty
//! string.
//!
//! # Example
//!
//! ```
//! use dirpick::core::paths::split_query;
//!
//! let (base, mask) = split_query("/srv/builds|41.1.104.2", '|').unwrap();
//! assert_eq!(base, "/srv/builds");
//! assert_eq!(mask, "41.1.104.2");
//!
//! assert!(split_query("41.1.104.2", '|').is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Default separator between base and mask in a combined query.
pub const DEFAULT_SEPARATOR: char = '|';

/// Errors from splitting queries or expanding base paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid argument '{query}': expected BASE{separator}MASK")]
    InvalidQuery { query: String, separator: char },

    #[error("environment variable '{0}' is not set")]
    UnsetVariable(String),

    #[error("unterminated variable reference in '{0}'")]
    Unterminated(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Split a combined `BASE<sep>MASK` query.
///
/// # Errors
///
/// Returns `PathError::InvalidQuery` unless the query contains exactly one
/// separator with a non-empty base before it.
pub fn split_query(query: &str, separator: char) -> Result<(&str, &str), PathError> {
    let invalid = || PathError::InvalidQuery {
        query: query.to_string(),
        separator,
    };

    if query.matches(separator).count() != 1 {
        return Err(invalid());
    }
    let (base, mask) = query.rsplit_once(separator).ok_or_else(invalid)?;
    if base.trim().is_empty() {
        return Err(invalid());
    }
    Ok((base, mask))
}

/// Expand `~` and environment variables in a base path.
///
/// # Errors
///
/// - `PathError::UnsetVariable` for a reference to an unset variable
/// - `PathError::Unterminated` for `${` or `%` without a closing delimiter
/// - `PathError::NoHomeDir` if `~` is used and no home directory is known
pub fn expand_base(raw: &str) -> Result<PathBuf, PathError> {
    expand_with(raw, |name| std::env::var(name).ok(), dirs::home_dir)
}

/// Expansion with injectable lookups, so tests do not touch the process
/// environment.
fn expand_with<V, H>(raw: &str, lookup: V, home: H) -> Result<PathBuf, PathError>
where
    V: Fn(&str) -> Option<String>,
    H: Fn() -> Option<PathBuf>,
{
    let var = |name: &str| lookup(name).ok_or_else(|| PathError::UnsetVariable(name.to_string()));
    let unterminated = || PathError::Unterminated(raw.to_string());

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    if rest == "~" || rest.starts_with("~/") || rest.starts_with("~\\") {
        let home = home().ok_or(PathError::NoHomeDir)?;
        out.push_str(&home.to_string_lossy());
        rest = &rest[1..];
    }

    while let Some(pos) = rest.find(['$', '%']) {
        out.push_str(&rest[..pos]);
        let marker = &rest[pos..];

        if let Some(braced) = marker.strip_prefix("${") {
            let end = braced.find('}').ok_or_else(unterminated)?;
            out.push_str(&var(&braced[..end])?);
            rest = &braced[end + 1..];
        } else if let Some(after) = marker.strip_prefix('$') {
            let len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            if len == 0 {
                // Lone `$` is kept literally.
                out.push('$');
            } else {
                out.push_str(&var(&after[..len])?);
            }
            rest = &after[len..];
        } else {
            let after = &marker[1..];
            let end = after.find('%').ok_or_else(unterminated)?;
            if end == 0 {
                // `%%` is a literal percent sign.
                out.push('%');
            } else {
                out.push_str(&var(&after[..end])?);
            }
            rest = &after[end + 1..];
        }
    }
    out.push_str(rest);

    Ok(PathBuf::from(out))
}
