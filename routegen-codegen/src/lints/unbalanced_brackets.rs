//! Lint for page paths whose brackets don't pair up.

use routegen_core::Conventions;

use super::{Diagnostic, Lint};
use crate::routes::PageFile;

/// Warns when a page path has a different number of `[` and `]`.
///
/// Such paths are still routed, but the unpaired bracket ends up in the
/// pathname and usually means a typo in a dynamic segment.
pub struct UnbalancedBracketsLint {
    conventions: Conventions,
}

impl UnbalancedBracketsLint {
    pub fn new(conventions: &Conventions) -> Self {
        Self {
            conventions: conventions.clone(),
        }
    }
}

impl Lint for UnbalancedBracketsLint {
    fn name(&self) -> &'static str {
        "unbalanced-brackets"
    }

    fn check(&self, pages: &[PageFile<'_>], diagnostics: &mut Vec<Diagnostic>) {
        for page in pages.iter().filter(|p| p.is_routable(&self.conventions)) {
            let path = page.stem_path();
            let open = path.matches('[').count();
            let close = path.matches(']').count();
            if open != close {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "unbalanced brackets in '{}' ({} '[' vs {} ']')",
                            path, open, close
                        ),
                    )
                    .at(page.source()),
                );
            }
        }
    }
}
