use std::sync::LazyLock;

use regex::Regex;
use routegen_core::ParamKind;

/// Shortest bracketed run, matched left to right without overlap.
static DYNAMIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("dynamic segment pattern is valid"));

/// A bracketed dynamic segment found in a page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: String,
    kind: ParamKind,
}

impl Segment {
    /// Parse a raw match such as `[id]`, `[...slug]` or `[[...slug]`.
    ///
    /// The name is the match with every bracket and the first `...` removed.
    pub fn parse(raw: &str) -> Self {
        let name = raw.replace(['[', ']'], "").replacen("...", "", 1);
        Self {
            name,
            kind: classify(raw),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }
}

/// Classify a raw bracketed match by its opening.
pub fn classify(raw: &str) -> ParamKind {
    if raw.starts_with("[[") {
        ParamKind::OptionalCatchAll
    } else if raw.starts_with("[...") {
        ParamKind::CatchAll
    } else {
        ParamKind::Dynamic
    }
}

/// Find every dynamic segment in `path`, in order of appearance.
pub fn find_segments(path: &str) -> impl Iterator<Item = Segment> + '_ {
    DYNAMIC_SEGMENT
        .find_iter(path)
        .map(|m| Segment::parse(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_and_kinds(path: &str) -> Vec<(String, ParamKind)> {
        find_segments(path)
            .map(|s| (s.name().to_string(), s.kind()))
            .collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("[id]"), ParamKind::Dynamic);
        assert_eq!(classify("[...slug]"), ParamKind::CatchAll);
        assert_eq!(classify("[[...slug]"), ParamKind::OptionalCatchAll);
        assert_eq!(classify("[[...slug]]"), ParamKind::OptionalCatchAll);
    }

    #[test]
    fn test_dynamic_segment() {
        assert_eq!(
            names_and_kinds("/posts/[id]"),
            vec![("id".to_string(), ParamKind::Dynamic)]
        );
    }

    #[test]
    fn test_catch_all_segment() {
        assert_eq!(
            names_and_kinds("/posts/[...slug]"),
            vec![("slug".to_string(), ParamKind::CatchAll)]
        );
    }

    #[test]
    fn test_optional_catch_all_matches_up_to_first_closing_bracket() {
        let segments: Vec<_> = find_segments("/posts/[[...slug]]").collect();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].name(), "slug");
        assert_eq!(segments[0].kind(), ParamKind::OptionalCatchAll);
    }

    #[test]
    fn test_multiple_segments_in_order() {
        assert_eq!(
            names_and_kinds("/[org]/[repo]/blob/[...path]"),
            vec![
                ("org".to_string(), ParamKind::Dynamic),
                ("repo".to_string(), ParamKind::Dynamic),
                ("path".to_string(), ParamKind::CatchAll),
            ]
        );
    }

    #[test]
    fn test_only_first_ellipsis_removed() {
        let segment = Segment::parse("[...a...b]");
        assert_eq!(segment.name(), "a...b");
    }

    #[test]
    fn test_unclosed_bracket_has_no_segment() {
        assert!(names_and_kinds("/posts/[id").is_empty());
        assert!(names_and_kinds("/posts/id]").is_empty());
    }

    #[test]
    fn test_empty_brackets_yield_empty_name() {
        assert_eq!(
            names_and_kinds("/posts/[]"),
            vec![(String::new(), ParamKind::Dynamic)]
        );
    }
}
