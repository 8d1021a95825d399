//! TypeScript route declaration generator.

use std::path::{Path, PathBuf};

use eyre::Result;
use routegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use routegen_core::{File, Route};

use crate::{
    ast::Union,
    augment::{link_module, router_module},
    code_file::CodeFile,
    declaration::route_alternatives,
};

/// Default declaration file, relative to the project directory.
pub const DEFAULT_OUTPUT_PATH: &str = "nextjs-routes.d.ts";

/// Default name of the route union.
pub const DEFAULT_TYPE_NAME: &str = "Routes";

const HEADER: [&str; 2] = [
    "THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.",
    "Run `routegen generate` to regenerate this file.",
];

/// Generates a `.d.ts` file typing `next/link` and `next/router` against
/// the routes of a project.
pub struct Generator<'a> {
    routes: &'a [Route],
    type_name: String,
    output_path: PathBuf,
}

impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.output_path.display().to_string(),
            content: self.render(),
        }]
    }

    fn generate(&self, project_dir: &Path) -> Result<GenerateResult> {
        let file = File::new(project_dir.join(&self.output_path), self.render());
        let write = file.write()?;

        tracing::debug!(
            path = %file.path().display(),
            routes = self.routes.len(),
            ?write,
            "wrote route declarations"
        );

        Ok(GenerateResult {
            path: file.path().to_path_buf(),
            write,
            route_count: self.routes.len(),
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(routes: &'a [Route]) -> Self {
        Self {
            routes,
            type_name: DEFAULT_TYPE_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Name of the generated union type.
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Output path, relative to the project directory passed to `generate`.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Render the declaration file.
    ///
    /// The output depends only on the routes, their order and the type name.
    pub fn render(&self) -> String {
        let union = Union::new(self.type_name.as_str())
            .variants(self.routes.iter().flat_map(route_alternatives));

        HEADER
            .iter()
            .fold(CodeFile::new(), |file, line| file.comment(*line))
            .add(union)
            .add(link_module(&self.type_name))
            .add(router_module(&self.type_name))
            .render()
    }
}
