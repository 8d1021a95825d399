//! List operation - extracted routes in walk order.

use eyre::{Context, Result};

use super::Project;
use crate::reports::ListReport;

/// Execute the list operation.
pub fn list(project: &Project) -> Result<ListReport> {
    let scan = project.scan().wrap_err("Failed to scan pages")?;

    Ok(ListReport {
        pages_dir: project.manifest().pages_dir().to_string(),
        file_count: scan.files.len(),
        routes: scan.routes,
    })
}
