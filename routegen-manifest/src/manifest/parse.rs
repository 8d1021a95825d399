//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE_NAME, Manifest, validate};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE_NAME)
    }
}

impl Manifest {
    /// Parse a routegen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a routegen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Validate values that did not come from a file, such as command-line
    /// overrides. Errors carry no source span.
    pub fn validate(&self) -> Result<()> {
        validate_manifest(self, &SourceContext::new("", "<command line>"))
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let routes = &manifest.routes;
    if routes.pages_dir.trim().is_empty() {
        return Err(ctx.validation_error(
            "pages_dir cannot be empty",
            validate::find_key_span(ctx.src(), "pages_dir"),
        ));
    }
    if validate::normalize_dir(&routes.pages_dir).is_empty() {
        return Err(ctx.validation_error(
            "pages_dir cannot be the project root",
            validate::find_key_span(ctx.src(), "pages_dir"),
        ));
    }
    if routes.non_routable_prefix.is_empty() {
        return Err(ctx.validation_error(
            "non_routable_prefix cannot be empty",
            validate::find_key_span(ctx.src(), "non_routable_prefix"),
        ));
    }
    if let Some(pos) = routes.ignore.iter().position(|name| name.trim().is_empty()) {
        return Err(ctx.validation_error(
            format!("ignore entry {} is empty", pos),
            validate::find_key_span(ctx.src(), "ignore"),
        ));
    }

    let output = &manifest.output;
    if output.path.trim().is_empty() {
        return Err(ctx.validation_error(
            "output path cannot be empty",
            validate::find_key_span(ctx.src(), "path"),
        ));
    }
    if let Some(reason) = validate::validate_type_name(&output.type_name) {
        return Err(ctx.invalid_identifier_error(
            &output.type_name,
            "output.type_name",
            reason,
            validate::find_key_span(ctx.src(), "type_name"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();

        assert_eq!(manifest.routes.pages_dir, "pages");
        assert_eq!(manifest.routes.non_routable_prefix, "_");
        assert_eq!(manifest.routes.ignore, vec!["node_modules"]);
        assert_eq!(manifest.output.path, "nextjs-routes.d.ts");
        assert_eq!(manifest.output.type_name, "Routes");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let manifest = Manifest::from_str(
            r#"
            [routes]
            pages_dir = "src/pages"

            [output]
            type_name = "AppRoutes"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.routes.pages_dir, "src/pages");
        assert_eq!(manifest.routes.non_routable_prefix, "_");
        assert_eq!(manifest.output.path, "nextjs-routes.d.ts");
        assert_eq!(manifest.output.type_name, "AppRoutes");
    }

    #[test]
    fn test_conventions_from_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [routes]
            pages_dir = "app-pages"
            non_routable_prefix = "~"
            ignore = ["node_modules", ".cache"]
            "#,
        )
        .unwrap();

        let conventions = manifest.conventions();
        assert_eq!(conventions.pages_dir, "app-pages");
        assert_eq!(conventions.non_routable_prefix, "~");
        assert_eq!(manifest.walk_options().ignore, vec!["node_modules", ".cache"]);
    }

    #[test]
    fn test_pages_dir_spellings_are_normalized() {
        for spelling in ["pages", "pages/", "./pages", "./pages/", " pages// "] {
            let manifest = Manifest::from_str(&format!("[routes]\npages_dir = \"{}\"\n", spelling))
                .unwrap();

            assert_eq!(manifest.pages_dir(), "pages", "spelling {:?}", spelling);
            assert_eq!(manifest.conventions().pages_dir, "pages");
        }

        let mut manifest = Manifest::default();
        manifest.routes.pages_dir = "./src/pages/".to_string();
        assert_eq!(manifest.conventions().pages_dir, "src/pages");
    }

    #[test]
    fn test_project_root_pages_dir_rejected() {
        for spelling in [".", "./", "./."] {
            let err = Manifest::from_str(&format!("[routes]\npages_dir = \"{}\"\n", spelling))
                .unwrap_err();

            match *err {
                Error::Validation { message, .. } => {
                    assert_eq!(message, "pages_dir cannot be the project root")
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            [routes]
            page_dir = "pages"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = Manifest::from_str(
            r#"
[routes]
non_routable_prefix = ""
"#,
        )
        .unwrap_err();

        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "non_routable_prefix cannot be empty");
                assert!(span.is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_type_name_rejected() {
        let err = Manifest::from_str(
            r#"
[output]
type_name = "2fast"
"#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_reserved_type_name_rejected() {
        let err = Manifest::from_str(
            r#"
[output]
type_name = "string"
"#,
        )
        .unwrap_err();

        match *err {
            Error::InvalidIdentifier { name, .. } => assert_eq!(name, "string"),
            other => panic!("expected invalid identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_overridden_values() {
        let mut manifest = Manifest::default();
        assert!(manifest.validate().is_ok());

        manifest.output.type_name = "my-routes".to_string();
        let err = manifest.validate().unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, span, .. } => {
                assert_eq!(name, "my-routes");
                assert!(span.is_none());
            }
            other => panic!("expected invalid identifier, got {:?}", other),
        }
    }
}
