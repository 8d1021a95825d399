//! Generate operation - write the route declaration file.

use eyre::{Context, Result};
use routegen_codegen::LanguageCodegen;

use super::Project;
use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Scans the pages directory, then writes or previews the declaration.
pub fn generate(project: &Project, opts: GenerateOptions) -> Result<GenerateReport> {
    let scan = project.scan().wrap_err("Failed to scan pages")?;
    let generator = project.generator(&scan.routes);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        let written = generator
            .generate(project.dir())
            .wrap_err("Failed to write route declarations")?;
        GenerationResult::Written(WrittenResult {
            path: written.path,
            write: written.write,
        })
    };

    Ok(GenerateReport {
        route_count: scan.routes.len(),
        diagnostics: scan.diagnostics,
        result,
    })
}
