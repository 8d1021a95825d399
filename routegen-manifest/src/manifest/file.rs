use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A routegen.toml location together with its parsed manifest.
///
/// The file is optional: when it does not exist, the manifest holds the
/// default conventions.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
    manifest: Manifest,
    loaded: bool,
}

impl ManifestFile {
    /// Open and parse the manifest at `path`, failing if it cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manifest = Manifest::from_file(&path)?;
        Ok(Self {
            path,
            manifest,
            loaded: true,
        })
    }

    /// Open the manifest at `path` if it exists, otherwise use defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            tracing::debug!(path = %path.display(), "no manifest found, using defaults");
            Ok(Self {
                path: path.to_path_buf(),
                manifest: Manifest::default(),
                loaded: false,
            })
        }
    }

    /// Get the manifest file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the manifest was read from disk.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Take ownership of the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}
