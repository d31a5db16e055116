//! Per-line include matching.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::index::bare_filename;

/// Quoted include directive; the capture is the raw include path.
static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#include(?-u:\s)+"([^"]+)""#).expect("include pattern is a valid regex")
});

/// Strip leading C-locale whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`).
pub fn strip_leading_whitespace(line: &str) -> &str {
    line.trim_start_matches([' ', '\t', '\n', '\x0B', '\x0C', '\r'])
}

/// Bare filename of the first quoted include on `line`, if any.
///
/// Lines whose first non-whitespace characters are `//` never match. The
/// directive does not need to start the line.
pub fn match_include_line(line: &str) -> Option<String> {
    let line = strip_leading_whitespace(line);
    if line.starts_with("//") {
        return None;
    }
    let captures = INCLUDE_RE.captures(line)?;
    bare_filename(Path::new(captures.get(1)?.as_str()))
}
