//! Unquoted family name validation.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Parts that may not start an identifier: a digit, `-` then a digit, or `--`.
static INVALID_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-?[0-9]|--)").unwrap());

/// Identifier characters: ASCII name characters, anything above U+009F,
/// a hex escape with its optional terminator, or an escaped non-hex character.
static IDENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[_a-zA-Z0-9-]|[^\x00-\x{9F}]|\\[0-9a-f]{1,6}(?:\r\n|[ \n\r\t\x0C])?|\\[^\n\r\x0C0-9a-f])+$",
    )
    .unwrap()
});

/// Validate and normalize an unquoted family name.
///
/// Whitespace runs collapse to a single space. Returns `None` if the name is
/// empty or any of its space-separated parts is not a valid CSS identifier.
pub(crate) fn parse_identifier(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.trim().split_ascii_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    for part in &parts {
        if INVALID_START_RE.is_match(part) || !IDENT_RE.is_match(part) {
            return None;
        }
    }

    Some(parts.join(" "))
}
