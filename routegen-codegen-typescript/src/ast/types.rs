//! TypeScript type literal, object literal and union builders.

use routegen_codegen::{CodeFragment, Renderable};

/// A property in an inline TypeScript type literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Render as `name: ty;` or `name?: ty;`.
    pub fn render(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, optional, self.ty)
    }
}

/// Single-line type literal such as `{ id: string; slug?: string[]; }`.
///
/// A type literal with no fields renders as the empty string.
#[derive(Debug, Clone, Default)]
pub struct TypeLiteral {
    fields: Vec<Field>,
}

impl TypeLiteral {
    pub fn render(&self) -> String {
        if self.fields.is_empty() {
            return String::new();
        }
        let body: String = self
            .fields
            .iter()
            .map(|field| format!("{} ", field.render()))
            .collect();
        format!("{{ {}}}", body)
    }
}

impl FromIterator<Field> for TypeLiteral {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Single-line object literal such as `{ pathname: '/', query: { ... } }`.
///
/// Values are written verbatim, so callers quote them.
#[derive(Debug, Clone, Default)]
pub struct ObjectLiteral {
    properties: Vec<(String, String)>,
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    pub fn render(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let body = self
            .properties
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", body)
    }
}

/// A union type alias with one variant per line.
///
/// ```text
/// type Routes =
///   | '/'
///   | '/about'
/// ```
///
/// With no variants the alias is `never`.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = String>) -> Self {
        self.variants.extend(variants);
        self
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.variants.is_empty() {
            return vec![CodeFragment::line(format!("type {} = never;", self.name))];
        }
        vec![
            CodeFragment::line(format!("type {} =", self.name)),
            CodeFragment::indent(
                self.variants
                    .iter()
                    .map(|v| CodeFragment::line(format!("| {}", v)))
                    .collect(),
            ),
        ]
    }
}
