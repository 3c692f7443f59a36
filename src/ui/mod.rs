//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Results go to stdout; warnings and errors go to stderr. Diagnostics
//! from the core are `tracing` events and are not routed through here.

pub mod output;
