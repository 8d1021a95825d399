use routegen_core::{Conventions, Query, Route};

use super::segment::{Segment, find_segments};

/// Suffix that maps an index page onto its directory.
const INDEX_SUFFIX: &str = "index";

/// A page file path with the pages directory and extension removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile<'a> {
    source: &'a str,
    stem_path: String,
}

impl<'a> PageFile<'a> {
    pub fn new(source: &'a str, conventions: &Conventions) -> Self {
        let without_pages_dir = source.replacen(&conventions.pages_dir, "", 1);
        let (stem, _) = split_extension(&without_pages_dir);
        Self {
            source,
            stem_path: stem.to_string(),
        }
    }

    /// The path as it was given.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The path after pages directory and extension removal.
    pub fn stem_path(&self) -> &str {
        &self.stem_path
    }

    /// Final path component, without any remaining extension.
    pub fn name(&self) -> &str {
        split_extension(base_name(&self.stem_path)).0
    }

    /// Directory components above the file, in order.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        let parent = match self.stem_path.rfind(is_separator) {
            Some(pos) => &self.stem_path[..pos],
            None => "",
        };
        parent.split(is_separator).filter(|dir| !dir.is_empty())
    }

    /// Whether the file produces a route.
    ///
    /// Only the file's own name is checked against the non-routable prefix;
    /// a prefixed ancestor directory does not exclude it.
    pub fn is_routable(&self, conventions: &Conventions) -> bool {
        !self.name().starts_with(&conventions.non_routable_prefix)
    }

    /// Route pathname: the stem path without a trailing `index`.
    pub fn pathname(&self) -> &str {
        self.stem_path
            .strip_suffix(INDEX_SUFFIX)
            .unwrap_or(&self.stem_path)
    }

    /// Dynamic segments of the stem path, repeated names included.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        find_segments(&self.stem_path)
    }

    /// Query map of the route; a repeated name keeps the last kind.
    pub fn query(&self) -> Query {
        let mut query = Query::new();
        for segment in self.segments() {
            query.insert(segment.name().to_string(), segment.kind());
        }
        query
    }

    pub fn to_route(&self) -> Route {
        Route {
            pathname: self.pathname().to_string(),
            query: self.query(),
        }
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || std::path::is_separator(c)
}

fn base_name(path: &str) -> &str {
    path.rsplit(is_separator).next().unwrap_or(path)
}

/// Split `path` into the part before the extension of its last component and
/// the extension itself (dot included).
///
/// A leading dot does not start an extension, and `..` has none.
fn split_extension(path: &str) -> (&str, &str) {
    let base = base_name(path);
    let base_start = path.len() - base.len();
    match base.rfind('.') {
        Some(dot) if dot > 0 && base != ".." => path.split_at(base_start + dot),
        _ => (path, ""),
    }
}
