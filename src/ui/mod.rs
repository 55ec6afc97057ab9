//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! All CLI output goes through this module so quiet and JSON modes are
//! handled in one place.

pub mod output;
