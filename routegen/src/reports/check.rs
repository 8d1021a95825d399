//! Check command report data structures.

use std::path::PathBuf;

use routegen_codegen::Diagnostic;

use super::{
    diagnostics::{render_diagnostics, warning_count},
    output::{Output, Report},
};

/// State of the declaration file compared with a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Report data from checking the declaration file.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the declaration file.
    pub path: PathBuf,
    pub status: FileStatus,
    pub route_count: usize,
    /// Lint diagnostics for the page files.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether warnings fail the check.
    pub deny_warnings: bool,
}

impl CheckReport {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.status == FileStatus::UpToDate
            && !(self.deny_warnings && warning_count(&self.diagnostics) > 0)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);

        let path = self.path.display();
        match self.status {
            FileStatus::UpToDate => out.preformatted(&format!(
                "✓ {} is up to date ({} route{})",
                path,
                self.route_count,
                if self.route_count == 1 { "" } else { "s" }
            )),
            FileStatus::Stale => out.warning(&format!(
                "error: {} is stale, run `routegen generate`",
                path
            )),
            FileStatus::Missing => out.warning(&format!(
                "error: {} is missing, run `routegen generate`",
                path
            )),
        }

        if self.deny_warnings {
            let warnings = warning_count(&self.diagnostics);
            if warnings > 0 {
                out.warning(&format!(
                    "error: {} warning{} denied",
                    warnings,
                    if warnings == 1 { "" } else { "s" }
                ));
            }
        }
    }
}
