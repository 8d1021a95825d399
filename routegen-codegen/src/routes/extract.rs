use routegen_core::{Conventions, Route};

use super::PageFile;

/// Turn page file paths into routes, preserving input order.
///
/// Files whose own name starts with the non-routable prefix are skipped.
pub fn extract_routes<I>(files: I, conventions: &Conventions) -> Vec<Route>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    files
        .into_iter()
        .filter_map(|file| {
            let page = PageFile::new(file.as_ref(), conventions);
            if !page.is_routable(conventions) {
                tracing::debug!(file = page.source(), "skipping non-routable page");
                return None;
            }
            let route = page.to_route();
            tracing::debug!(
                file = page.source(),
                pathname = %route.pathname,
                params = route.query.len(),
                "extracted route"
            );
            Some(route)
        })
        .collect()
}
