//! Shared rendering of lint diagnostics.

use routegen_codegen::{Diagnostic, Severity};

use super::output::Output;

/// Diagnostics never share stdout with command results.
pub fn render_diagnostics(diagnostics: &[Diagnostic], out: &mut dyn Output) {
    for diag in diagnostics {
        let text = diag.to_string();
        match diag.severity {
            Severity::Warning => out.warning(&text),
            Severity::Info => out.note(&text),
        }
    }
}

/// Number of warning diagnostics.
pub fn warning_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity.is_warning())
        .count()
}
