//! List command report data structures.

use routegen_core::Route;

use super::output::{Output, Report};

/// Routes extracted from the pages directory.
#[derive(Debug)]
pub struct ListReport {
    pub pages_dir: String,
    /// Number of files walked, routable or not.
    pub file_count: usize,
    pub routes: Vec<Route>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.routes.is_empty() {
            out.preformatted(&format!("No routes found in {}/", self.pages_dir));
            return;
        }

        out.section(&format!(
            "Routes ({} from {} file{})",
            self.routes.len(),
            self.file_count,
            if self.file_count == 1 { "" } else { "s" }
        ));

        for route in &self.routes {
            if route.is_static() {
                out.list_item(&route.pathname);
            } else {
                let params = route
                    .query
                    .iter()
                    .map(|(name, kind)| format!("{}: {}", name, kind))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.list_item(&format!("{} ({})", route.pathname, params));
            }
        }
    }
}
