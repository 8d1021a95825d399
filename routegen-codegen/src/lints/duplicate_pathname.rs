//! Lint for page files that resolve to the same pathname.

use std::collections::HashMap;

use routegen_core::Conventions;

use super::{Diagnostic, Lint};
use crate::routes::PageFile;

/// Warns when two routable files produce the same pathname.
///
/// A trailing slash is not significant, so `about.tsx` and
/// `about/index.tsx` collide.
pub struct DuplicatePathnameLint {
    conventions: Conventions,
}

impl DuplicatePathnameLint {
    pub fn new(conventions: &Conventions) -> Self {
        Self {
            conventions: conventions.clone(),
        }
    }
}

fn normalize(pathname: &str) -> &str {
    match pathname.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

impl Lint for DuplicatePathnameLint {
    fn name(&self) -> &'static str {
        "duplicate-pathname"
    }

    fn check(&self, pages: &[PageFile<'_>], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for page in pages.iter().filter(|p| p.is_routable(&self.conventions)) {
            let key = normalize(page.pathname());
            if let Some(first) = seen.get(key) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "route '{}' is defined more than once (conflicts with '{}')",
                            key, first
                        ),
                    )
                    .at(page.source()),
                );
            } else {
                seen.insert(key, page.source());
            }
        }
    }
}
