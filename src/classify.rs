//! Line classification for feature markers.
//!
//! Pure pattern matches over a single source line: one-line block comments,
//! `#define NAME VALUE` and `#undef NAME`. Nothing here looks at more than one
//! line or at the feature policy.

use regex::Regex;
use std::sync::LazyLock;

/// A line consisting only of `/* ... */` plus surrounding whitespace.
static ONE_LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*/\*(.*)\*/\s*$").expect("Invalid one-line comment regex")
});

/// `#define KEY VALUE`; the value runs to the end of the line.
static DEFINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#\s*define\s+(\S+)\s+(.*)").expect("Invalid #define regex")
});

/// `#undef KEY`.
static UNDEF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*undef\s+(\S+)").expect("Invalid #undef regex"));

/// Text between the delimiters of a single block comment spanning the line.
///
/// The greedy pattern also matches `/* a */ code /* b */`; an inner `*/` means
/// the line holds more than one comment, so it is rejected.
fn comment_body(line: &str) -> Option<&str> {
    let inner = ONE_LINE_COMMENT_REGEX.captures(line)?.get(1)?.as_str();
    if inner.contains("*/") {
        return None;
    }
    Some(inner)
}

/// Returns `true` if the whole line is a single block comment.
pub fn is_one_line_comment(line: &str) -> bool {
    comment_body(line).is_some()
}

/// Returns the text between `/*` and `*/` if the line is a one-line comment,
/// otherwise the line itself.
///
/// Note: an empty comment (`/**/`) yields the original line, not `""`.
pub fn strip_comment(line: &str) -> &str {
    match comment_body(line) {
        Some(inner) if !inner.is_empty() => inner,
        _ => line,
    }
}

/// Extracts `(key, value)` from a `#define` line.
///
/// Returns `None` when the value contains `*/`, which means the define sits
/// inside a block comment that closes on this line. Trailing whitespace of the
/// value is kept.
pub fn fetch_define(line: &str) -> Option<(&str, &str)> {
    let caps = DEFINE_REGEX.captures(line)?;
    let key = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str();
    if value.contains("*/") {
        return None;
    }
    Some((key, value))
}

/// Extracts the key from an `#undef` line.
pub fn fetch_undef(line: &str) -> Option<&str> {
    UNDEF_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|key| key.as_str())
}
