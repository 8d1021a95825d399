//! CodeFile abstraction for structured TypeScript file generation.
//!
//! A file is a block of leading line comments followed by body elements
//! separated by blank lines.

use routegen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a TypeScript file.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .comment("THIS IS AN AUTOGENERATED FILE.")
///     .add(RawCode::new("type Routes = '/';"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `//` comment line to the file header.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.header.push(text.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for comment in &self.header {
            builder.push_line(&format!("// {}", comment));
        }

        if !self.header.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.emit(fragments);
        }

        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Each line of the text becomes one line fragment, so relative indentation
/// inside the text is preserved.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_header_only() {
        let file = CodeFile::new().comment("generated");
        assert_eq!(file.render(), "// generated\n");
    }

    #[test]
    fn test_header_and_body() {
        let file = CodeFile::new()
            .comment("first")
            .comment("second")
            .add(RawCode::new("type A = 1;"));

        assert_eq!(file.render(), "// first\n// second\n\ntype A = 1;\n");
    }

    #[test]
    fn test_blank_lines_between_body() {
        let file = CodeFile::new()
            .add(RawCode::new("type A = 1;"))
            .add(RawCode::new("type B = 2;"));

        assert_eq!(file.render(), "type A = 1;\n\ntype B = 2;\n");
    }

    #[test]
    fn test_raw_code_keeps_relative_indent() {
        let file = CodeFile::new().add(RawCode::new("a(\n  b\n);"));
        assert_eq!(file.render(), "a(\n  b\n);\n");
    }

    #[test]
    fn test_block_body_is_indented() {
        let file = CodeFile::new().add(CodeFragmentBlock);
        assert_eq!(file.render(), "x {\n  y;\n}\n");
    }

    struct CodeFragmentBlock;

    impl Renderable for CodeFragmentBlock {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::block(
                "x {",
                vec![CodeFragment::line("y;")],
                Some("}".to_string()),
            )]
        }
    }
}
