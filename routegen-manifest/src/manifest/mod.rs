//! Manifest types and parsing for routegen.toml files.

mod file;
mod parse;
mod validate;

pub use file::ManifestFile;
use routegen_core::{Conventions, WalkOptions};
use serde::Deserialize;

/// Conventional manifest file name, looked up in the project root.
pub const MANIFEST_FILE_NAME: &str = "routegen.toml";

/// Root manifest for routegen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Page discovery and naming conventions
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Generated declaration file
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[routes]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutesConfig {
    /// Directory holding the page files, relative to the project root
    pub pages_dir: String,

    /// File names starting with this prefix are not routable
    pub non_routable_prefix: String,

    /// Directory names skipped while walking the pages directory
    pub ignore: Vec<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            pages_dir: Conventions::DEFAULT_PAGES_DIR.to_string(),
            non_routable_prefix: Conventions::DEFAULT_NON_ROUTABLE_PREFIX.to_string(),
            ignore: WalkOptions::DEFAULT_IGNORE
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the declaration file, relative to the project root
    pub path: String,

    /// Name of the generated union type
    pub type_name: String,
}

impl OutputConfig {
    pub const DEFAULT_PATH: &'static str = "nextjs-routes.d.ts";
    pub const DEFAULT_TYPE_NAME: &'static str = "Routes";
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: Self::DEFAULT_PATH.to_string(),
            type_name: Self::DEFAULT_TYPE_NAME.to_string(),
        }
    }
}

impl Manifest {
    /// Naming conventions used by the route extractor.
    pub fn conventions(&self) -> Conventions {
        Conventions::new(&self.routes.non_routable_prefix, self.pages_dir())
    }

    /// The pages directory with any leading `./` and trailing `/` removed.
    ///
    /// Route extraction matches this text inside page paths, so the walk
    /// root and the extractor must both use this spelling.
    pub fn pages_dir(&self) -> &str {
        validate::normalize_dir(&self.routes.pages_dir)
    }

    /// Options for walking the pages directory.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::new(self.routes.ignore.iter().cloned())
    }
}
