//! Route model shared across the workspace.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a dynamic URL segment binds to its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKind {
    /// `[name]`: exactly one segment, bound to a string.
    Dynamic,
    /// `[...name]`: one or more segments, bound to an array of strings.
    CatchAll,
    /// `[[...name]]`: zero or more segments, absent or an array of strings.
    OptionalCatchAll,
}

impl ParamKind {
    /// Name used in listings and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::CatchAll => "catch-all",
            Self::OptionalCatchAll => "optional-catch-all",
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of a route, keyed by name in segment order.
pub type Query = IndexMap<String, ParamKind>;

/// A routable page: its normalized pathname and dynamic parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub pathname: String,
    pub query: Query,
}

impl Route {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: Query::new(),
        }
    }

    /// Add a parameter. A repeated name keeps its position and takes the new kind.
    pub fn param(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        self.query.insert(name.into(), kind);
        self
    }

    /// Whether the route has no dynamic segments.
    pub fn is_static(&self) -> bool {
        self.query.is_empty()
    }
}

/// File naming convention used to turn page files into routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    /// Files whose name starts with this prefix are not routable.
    pub non_routable_prefix: String,
    /// Directory holding the page files.
    pub pages_dir: String,
}

impl Conventions {
    pub const DEFAULT_NON_ROUTABLE_PREFIX: &'static str = "_";
    pub const DEFAULT_PAGES_DIR: &'static str = "pages";

    pub fn new(non_routable_prefix: impl Into<String>, pages_dir: impl Into<String>) -> Self {
        Self {
            non_routable_prefix: non_routable_prefix.into(),
            pages_dir: pages_dir.into(),
        }
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NON_ROUTABLE_PREFIX, Self::DEFAULT_PAGES_DIR)
    }
}
