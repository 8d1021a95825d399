//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level in TypeScript declaration files.
const TYPESCRIPT_INDENT: &str = "  ";

/// Builds code line by line with proper indentation.
///
/// # Example
///
/// ```
/// use routegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("type Routes =")
///     .push_indent()
///     .push_line("| '/'")
///     .push_dedent();
///
/// assert_eq!(builder.build(), "type Routes =\n  | '/'\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    ///
    /// Empty lines get no indentation, so output has no trailing whitespace.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(TYPESCRIPT_INDENT);
        }
    }
}
