//! Check operation - compare the declaration on disk with a fresh render.

use eyre::{Context, Result};
use routegen_core::File;

use super::Project;
use crate::reports::{CheckReport, FileStatus};

/// Execute the check operation.
///
/// Nothing is written; the declaration is rendered in memory.
pub fn check(project: &Project, deny_warnings: bool) -> Result<CheckReport> {
    let scan = project.scan().wrap_err("Failed to scan pages")?;
    let expected = project.generator(&scan.routes).render();

    let file = File::new(project.output_path(), expected);
    let status = match file.read_existing()? {
        None => FileStatus::Missing,
        Some(existing) if existing == file.content() => FileStatus::UpToDate,
        Some(_) => FileStatus::Stale,
    };

    tracing::debug!(path = %file.path().display(), ?status, "checked declaration");

    Ok(CheckReport {
        path: file.path().to_path_buf(),
        status,
        route_count: scan.routes.len(),
        diagnostics: scan.diagnostics,
        deny_warnings,
    })
}
