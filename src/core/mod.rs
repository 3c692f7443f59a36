//! core
//!
//! Domain types and the resolution algorithm.
//!
//! # Modules
//!
//! - [`identifier`] - Classify names as dates or four-part versions
//! - [`catalog`] - Scan a base directory into sorted, typed entries
//! - [`resolve`] - Exact / predecessor / latest matching
//! - [`errors`] - Failures of a resolution call
//! - [`paths`] - Query splitting and base-path expansion
//! - [`bootstrap`] - Seeding a missing base with sample directories
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - A name that does not classify is a normal outcome, not an error
//! - Identifiers are only ever compared within one variant
//! - Every resolution scans the filesystem afresh; nothing is cached

pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod identifier;
pub mod paths;
pub mod resolve;
