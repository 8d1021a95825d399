//! Validation helpers for manifest values.

use miette::SourceSpan;

/// Words that cannot name a TypeScript type alias.
const TS_RESERVED_TYPE_NAMES: &[&str] = &[
    "any", "bigint", "boolean", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "import", "in", "instanceof", "never", "new", "null",
    "number", "object", "return", "string", "super", "switch", "symbol", "this", "throw", "true",
    "try", "typeof", "undefined", "unknown", "var", "void", "while", "with",
];

/// Canonical spelling of a project-relative directory: no leading `./`
/// and no trailing `/`.
pub(crate) fn normalize_dir(dir: &str) -> &str {
    let mut dir = dir.trim();
    while let Some(rest) = dir.strip_prefix("./") {
        dir = rest.trim_start_matches('/');
    }
    if dir == "." {
        return "";
    }
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() && dir.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

/// Find the span of the value assigned to `key` in the TOML source.
///
/// Only `key = value` lines are matched; the span covers the value.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            let after_key = rest.trim_start();
            if let Some(value) = after_key.strip_prefix('=') {
                let value = value.trim();
                if !value.is_empty() {
                    let start = offset + line.find(value).unwrap_or(0);
                    return Some(SourceSpan::from((start, value.len())));
                }
            }
        }
        offset += line.len();
    }
    None
}

/// Check that a name is usable as a TypeScript type alias.
///
/// Returns the reason it is not, or `None` when it is valid.
pub(crate) fn validate_type_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or '$'"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("name may only contain letters, digits, underscores and '$'");
    }

    if TS_RESERVED_TYPE_NAMES.contains(&name) {
        return Some("name is a reserved TypeScript word");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dir() {
        assert_eq!(normalize_dir("pages"), "pages");
        assert_eq!(normalize_dir("pages/"), "pages");
        assert_eq!(normalize_dir("./pages"), "pages");
        assert_eq!(normalize_dir(".//src/pages//"), "src/pages");
        assert_eq!(normalize_dir("./"), "");
        assert_eq!(normalize_dir("."), "");
        assert_eq!(normalize_dir("/srv/app/pages/"), "/srv/app/pages");
    }

    #[test]
    fn test_find_key_span() {
        let src = "[output]\ntype_name = \"2fast\"\n";
        let span = find_key_span(src, "type_name").unwrap();

        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"2fast\"");
    }

    #[test]
    fn test_find_key_span_ignores_prefixed_keys() {
        let src = "path_prefix = \"x\"\npath = \"out.d.ts\"\n";
        let span = find_key_span(src, "path").unwrap();

        assert_eq!(
            &src[span.offset()..span.offset() + span.len()],
            "\"out.d.ts\""
        );
    }

    #[test]
    fn test_find_key_span_missing() {
        assert!(find_key_span("[routes]\n", "pages_dir").is_none());
    }

    #[test]
    fn test_validate_type_name() {
        assert_eq!(validate_type_name("Routes"), None);
        assert_eq!(validate_type_name("$Routes_2"), None);
        assert!(validate_type_name("").is_some());
        assert!(validate_type_name("2fast").is_some());
        assert!(validate_type_name("app-routes").is_some());
        assert!(validate_type_name("never").is_some());
    }
}
