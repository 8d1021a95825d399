//! Ambient module declarations (`declare module "..." { ... }`).

use routegen_codegen::{CodeFragment, Renderable};

/// An ambient module declaration wrapping arbitrary body fragments.
#[derive(Debug, Clone)]
pub struct DeclareModule {
    module: String,
    body: Vec<CodeFragment>,
}

impl DeclareModule {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            body: Vec::new(),
        }
    }

    /// Append a node to the module body.
    pub fn body<R: Renderable>(mut self, node: R) -> Self {
        self.body.extend(node.to_fragments());
        self
    }
}

impl Renderable for DeclareModule {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("declare module \"{}\" {{", self.module),
            self.body.clone(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use routegen_codegen::CodeBuilder;

    use super::*;
    use crate::RawCode;

    #[test]
    fn test_declare_module_indents_body() {
        let module = DeclareModule::new("next/router").body(RawCode::new(
            "import type { NextRouter } from \"next/router\";\n\nexport function useRouter(): Router;",
        ));

        let mut builder = CodeBuilder::typescript();
        builder.emit(&module);

        assert_eq!(
            builder.build(),
            "declare module \"next/router\" {\n  import type { NextRouter } from \"next/router\";\n\n  export function useRouter(): Router;\n}\n"
        );
    }

    #[test]
    fn test_empty_declare_module() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&DeclareModule::new("next/link"));

        assert_eq!(builder.build(), "declare module \"next/link\" {\n}\n");
    }
}
