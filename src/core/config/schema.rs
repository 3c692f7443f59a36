//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! In order of precedence:
//! 1. `$DIRPICK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/dirpick/config.toml`
//! 3. `~/.dirpick/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Values are validated after parsing; a separator that could appear
//! inside a date or version name would make `BASE|MASK` queries ambiguous.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration.
///
/// # Example
///
/// ```toml
/// base = "$HOME/builds"
/// separator = "|"
/// bootstrap = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default base directory, before `~`/variable expansion
    pub base: Option<String>,

    /// Separator between base and mask in combined queries
    pub separator: Option<char>,

    /// Seed a missing base with sample directories before resolving
    pub bootstrap: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base) = &self.base {
            if base.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "base cannot be empty".to_string(),
                ));
            }
        }

        if let Some(separator) = self.separator {
            validate_separator(separator)?;
        }

        Ok(())
    }
}

/// Check that a separator cannot occur inside an identifier.
pub fn validate_separator(separator: char) -> Result<(), ConfigError> {
    if separator.is_alphanumeric()
        || separator.is_whitespace()
        || separator == '.'
        || separator == '-'
    {
        return Err(ConfigError::InvalidValue(format!(
            "invalid separator '{}': must not be alphanumeric, whitespace, '.' or '-'",
            separator
        )));
    }
    Ok(())
}
