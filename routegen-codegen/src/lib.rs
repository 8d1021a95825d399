//! Route extraction and shared code generation utilities for routegen.
//!
//! This crate turns page file paths into [`Route`](routegen_core::Route)
//! records and provides the language-agnostic pieces used by declaration
//! generators (e.g., `routegen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`routes`] - Route extraction from page file paths
//! - [`lints`] - Checks over page files that report diagnostics
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)

pub mod builder;
pub mod language;
pub mod lints;
pub mod routes;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
pub use lints::{Diagnostic, Lint, Severity, validate};
pub use routes::{PageFile, Segment, extract_routes};
