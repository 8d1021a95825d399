//! Generate command report data structures.

use std::path::PathBuf;

use routegen_codegen::{Diagnostic, PreviewFile};
use routegen_core::WriteResult;

use super::{
    diagnostics::render_diagnostics,
    output::{Output, Report},
};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of routes in the declaration.
    pub route_count: usize,

    /// Lint diagnostics for the page files.
    pub diagnostics: Vec<Diagnostic>,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The declaration was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when the declaration was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub write: WriteResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(&self.diagnostics, out);

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let status = match written.write {
            WriteResult::Written => "Generated",
            WriteResult::Unchanged => "Unchanged",
        };
        out.key_value(status, &written.path.display().to_string());
        out.key_value("Routes", &self.route_count.to_string());
    }

    /// Only file content reaches stdout, so a preview can be redirected
    /// straight into a declaration file.
    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.raw(&file.content);
            out.note(&format!(
                "{} route{} would be written to {}",
                self.route_count,
                if self.route_count == 1 { "" } else { "s" },
                file.path
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            route_count: 3,
            diagnostics: Vec::new(),
            result: GenerationResult::Written(WrittenResult {
                path: PathBuf::from("nextjs-routes.d.ts"),
                write: WriteResult::Unchanged,
            }),
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec!["Unchanged: nextjs-routes.d.ts", "Routes: 3"]
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            route_count: 1,
            diagnostics: Vec::new(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "nextjs-routes.d.ts".to_string(),
                content: "type Routes = never;\n".to_string(),
            }]),
        };
        let mut out = BufferOutput::default();

        report.render(&mut out);

        assert_eq!(out.stdout, vec!["type Routes = never;\n"]);
        assert_eq!(
            out.stderr,
            vec!["1 route would be written to nextjs-routes.d.ts"]
        );
    }
}
