//! Lint for parameter names repeated within one page path.

use std::collections::HashSet;

use routegen_core::Conventions;

use super::{Diagnostic, Lint};
use crate::routes::PageFile;

/// Warns when a page path binds the same parameter name twice.
///
/// The route keeps a single field for the name, typed by the last occurrence.
pub struct DuplicateParamLint {
    conventions: Conventions,
}

impl DuplicateParamLint {
    pub fn new(conventions: &Conventions) -> Self {
        Self {
            conventions: conventions.clone(),
        }
    }
}

impl Lint for DuplicateParamLint {
    fn name(&self) -> &'static str {
        "duplicate-param"
    }

    fn check(&self, pages: &[PageFile<'_>], diagnostics: &mut Vec<Diagnostic>) {
        for page in pages.iter().filter(|p| p.is_routable(&self.conventions)) {
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();
            for segment in page.segments() {
                let name = segment.name().to_string();
                if !seen.insert(name.clone()) && reported.insert(name.clone()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "parameter '{}' appears more than once; the last occurrence ({}) wins",
                                name,
                                page.query()[name.as_str()]
                            ),
                        )
                        .at(page.source()),
                    );
                }
            }
        }
    }
}
