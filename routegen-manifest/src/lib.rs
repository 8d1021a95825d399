//! Parsing and validation of `routegen.toml`.
//!
//! The manifest is optional: a project without one gets the default Next.js
//! conventions (`pages/`, `_` prefix) and writes `nextjs-routes.d.ts`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{MANIFEST_FILE_NAME, Manifest, ManifestFile, OutputConfig, RoutesConfig};
