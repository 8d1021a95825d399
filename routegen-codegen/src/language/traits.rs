//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use routegen_core::{ParamKind, WriteResult};

/// Trait for language-specific route declaration generators.
pub trait LanguageCodegen {
    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files relative to the given project directory
    fn generate(&self, project_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Absolute or project-relative path of the declaration file
    pub path: PathBuf,
    /// What happened to the file on disk
    pub write: WriteResult,
    /// Number of routes in the declaration
    pub route_count: usize,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the project directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping route parameter kinds to language-specific types.
///
/// Implementations should match on every [`ParamKind`] variant without a
/// wildcard arm, so adding a variant fails to compile until it is handled.
pub trait TypeMapper {
    /// Type of the value bound to a parameter of this kind
    fn map_param_type(&self, kind: ParamKind) -> &'static str;

    /// Whether a parameter of this kind may be absent
    fn is_optional_param(&self, kind: ParamKind) -> bool;
}
