//! String literal rendering.

/// Render `value` as a single-quoted TypeScript string literal.
///
/// Backslashes and single quotes are escaped; everything else is kept as is.
pub fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
