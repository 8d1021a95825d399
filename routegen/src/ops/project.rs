//! Project loading: walk the pages directory and extract routes.

use std::path::{Path, PathBuf};

use eyre::Result;
use routegen_codegen::{Diagnostic, PageFile, extract_routes, validate};
use routegen_codegen_typescript::Generator;
use routegen_core::{Route, list_files, to_slash_path};
use routegen_manifest::Manifest;

/// A Next.js project directory with its resolved configuration.
pub struct Project {
    dir: PathBuf,
    manifest: Manifest,
}

/// Everything learned from one walk of the pages directory.
pub struct Scan {
    /// Page file paths relative to the project directory, in walk order.
    pub files: Vec<String>,
    pub routes: Vec<Route>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Project {
    pub fn new(dir: impl AsRef<Path>, manifest: Manifest) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            manifest,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Absolute or working-directory-relative path of the declaration file.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(&self.manifest.output.path)
    }

    /// Walk the pages directory, lint the page files and extract routes.
    pub fn scan(&self) -> Result<Scan> {
        let conventions = self.manifest.conventions();
        let pages_root = self.dir.join(&conventions.pages_dir);

        let files: Vec<String> = list_files(&pages_root, &self.manifest.walk_options())?
            .iter()
            .map(|path| to_slash_path(path.strip_prefix(&self.dir).unwrap_or(path.as_path())))
            .collect();

        let diagnostics = {
            let pages: Vec<PageFile<'_>> = files
                .iter()
                .map(|file| PageFile::new(file, &conventions))
                .collect();
            validate(&pages, &conventions)
        };
        let routes = extract_routes(&files, &conventions);

        tracing::info!(
            pages_dir = %pages_root.display(),
            files = files.len(),
            routes = routes.len(),
            diagnostics = diagnostics.len(),
            "scanned pages"
        );

        Ok(Scan {
            files,
            routes,
            diagnostics,
        })
    }

    /// A declaration generator configured from the manifest.
    pub fn generator<'a>(&self, routes: &'a [Route]) -> Generator<'a> {
        Generator::new(routes)
            .type_name(&self.manifest.output.type_name)
            .output_path(&self.manifest.output.path)
    }
}
