//! Lints over page files.
//!
//! Lints never change the extracted routes. They point out files whose
//! interpretation is likely to surprise: repeated parameter names, unbalanced
//! brackets, colliding pathnames, and files routed despite living in a
//! non-routable directory.

mod diagnostic;
mod duplicate_param;
mod duplicate_pathname;
mod non_routable_directory;
mod unbalanced_brackets;

pub use diagnostic::{Diagnostic, Severity};
pub use duplicate_param::DuplicateParamLint;
pub use duplicate_pathname::DuplicatePathnameLint;
pub use non_routable_directory::NonRoutableDirectoryLint;
use routegen_core::Conventions;
pub use unbalanced_brackets::UnbalancedBracketsLint;

use crate::routes::PageFile;

/// A check over the page files of a project.
pub trait Lint {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the page files and add any diagnostics.
    fn check(&self, pages: &[PageFile<'_>], diagnostics: &mut Vec<Diagnostic>);
}

/// The built-in lints for the given conventions.
pub fn builtin_lints(conventions: &Conventions) -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(DuplicateParamLint::new(conventions)),
        Box::new(UnbalancedBracketsLint::new(conventions)),
        Box::new(DuplicatePathnameLint::new(conventions)),
        Box::new(NonRoutableDirectoryLint::new(conventions)),
    ]
}

/// Run every built-in lint over `pages`.
pub fn validate(pages: &[PageFile<'_>], conventions: &Conventions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in builtin_lints(conventions) {
        lint.check(pages, &mut diagnostics);
    }
    diagnostics
}
