//! Recursive enumeration of page files.

use std::{
    ffi::OsStr,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use eyre::{Result, WrapErr};
use walkdir::{DirEntry, WalkDir};

/// Options for [`list_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Directory names that are pruned together with everything below them.
    pub ignore: Vec<String>,
}

impl WalkOptions {
    pub const DEFAULT_IGNORE: &'static [&'static str] = &["node_modules"];

    pub fn new(ignore: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ignore: ignore.into_iter().map(Into::into).collect(),
        }
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self.ignore.iter().any(|name| entry.file_name() == OsStr::new(name))
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IGNORE.iter().copied())
    }
}

/// List every file below `root`, depth first.
///
/// Entries are visited in file name order within each directory, so the
/// result is stable across runs and platforms. Directories are never part
/// of the result.
pub fn list_files(root: &Path, opts: &WalkOptions) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let ignored = opts.is_ignored(entry);
            if ignored {
                tracing::trace!(path = %entry.path().display(), "pruning ignored directory");
            }
            !ignored
        });

    for entry in walker {
        let entry =
            entry.wrap_err_with(|| format!("failed to read directory '{}'", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(root = %root.display(), count = files.len(), "listed page files");
    Ok(files)
}

/// Render a path with `/` separators regardless of platform.
pub fn to_slash_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}
