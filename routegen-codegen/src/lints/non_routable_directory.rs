//! Lint for routable files inside non-routable directories.

use routegen_core::Conventions;

use super::{Diagnostic, Lint};
use crate::routes::PageFile;

/// Reports files that are routed although a parent directory carries the
/// non-routable prefix.
///
/// Only a file's own name decides whether it is routable, so
/// `pages/_components/button.tsx` becomes the route `/_components/button`.
pub struct NonRoutableDirectoryLint {
    conventions: Conventions,
}

impl NonRoutableDirectoryLint {
    pub fn new(conventions: &Conventions) -> Self {
        Self {
            conventions: conventions.clone(),
        }
    }
}

impl Lint for NonRoutableDirectoryLint {
    fn name(&self) -> &'static str {
        "non-routable-directory"
    }

    fn check(&self, pages: &[PageFile<'_>], diagnostics: &mut Vec<Diagnostic>) {
        let prefix = self.conventions.non_routable_prefix.as_str();

        for page in pages.iter().filter(|p| p.is_routable(&self.conventions)) {
            if let Some(dir) = page.directories().find(|dir| dir.starts_with(prefix)) {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!(
                            "'{}' is inside non-routable directory '{}' but is still emitted as route '{}'",
                            page.source(),
                            dir,
                            page.pathname()
                        ),
                    )
                    .at(page.source()),
                );
            }
        }
    }
}
