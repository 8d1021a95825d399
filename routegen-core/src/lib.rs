//! Core types and utilities for the routegen route type generator.
//!
//! This crate provides the route model shared by the extractor and the
//! declaration generators, the directory walker that feeds them, and the
//! file writer used for generated output.

mod file;
mod types;
mod walk;

// File operations
pub use file::{File, WriteResult};
// Route model
pub use types::{Conventions, ParamKind, Query, Route};
// Directory walking
pub use walk::{WalkOptions, list_files, to_slash_path};
