//! dirpick - pick the dated or versioned subdirectory closest to a request
//!
//! Given a base directory whose children are named like `2015-12-13` or
//! `41.1.104.1`, dirpick returns the child that matches a requested
//! identifier exactly, or else the nearest earlier one of the same kind,
//! or else the latest child overall.
//!
//! # Architecture
//!
//! - [`core`] - Classification, catalog scanning, and resolution
//! - [`cli`] - Command-line interface layer (parses args, calls core)
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```no_run
//! use dirpick::core::resolve::{resolve_in, Mask};
//! use std::path::Path;
//!
//! let found = resolve_in(Path::new("/srv/builds"), &Mask::new("41.1.104.2")).unwrap();
//! println!("{}", found.path().display());
//! ```

pub mod cli;
pub mod core;
pub mod ui;
