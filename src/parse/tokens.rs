//! Token classification for the variation, oblique and line-height sections.
//!
//! Patterns are compiled once on first use and shared by every parse.

use regex_lite::Regex;
use std::sync::LazyLock;

/// What a token in the variation section turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenClass {
    Size,
    Italic,
    Oblique,
    SmallCaps,
    WeightKeyword,
    /// Bare number, still subject to the `1..=1000` range check.
    WeightNumber,
    Stretch,
}

/// How a table entry recognizes its token.
enum Matcher {
    Keywords(&'static [&'static str]),
    Pattern(&'static LazyLock<Regex>),
}

impl Matcher {
    fn matches(&self, token: &str) -> bool {
        match self {
            Matcher::Keywords(words) => words.contains(&token),
            Matcher::Pattern(re) => re.is_match(token),
        }
    }
}

/// Absolute size keywords, including the non-standard `s-small`.
const SIZE_KEYWORDS: &[&str] = &[
    "xx-small", "x-small", "s-small", "small", "medium", "large", "x-large", "xx-large",
];

/// Relative size keywords.
const SIZE_COMPARE_KEYWORDS: &[&str] = &["larger", "smaller"];

const WEIGHT_KEYWORDS: &[&str] = &["bold", "bolder", "lighter"];

const STRETCH_KEYWORDS: &[&str] = &[
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
];

/// Number with a length unit or `%`, optionally signed.
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]*\.)?[0-9]+(?:em|ex|ch|rem|vh|vw|vmin|vmax|px|mm|cm|in|pt|pc|%)$")
        .unwrap()
});

/// Bare number with an optional exponent.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]*\.)?[0-9]+(?:e[+-]?(?:0|[1-9][0-9]*))?$").unwrap()
});

/// Angle accepted after `oblique`.
static ANGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]*\.)?[0-9]+(?:deg|grad|rad|turn)$").unwrap()
});

/// Line height: a number with an optional length unit or `%`.
static LINE_HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]*\.)?[0-9]+(?:em|ex|ch|rem|vh|vw|vmin|vmax|px|mm|cm|in|pt|pc|%)?$")
        .unwrap()
});

/// Variation rules in priority order; the first match wins.
static VARIATION_RULES: &[(Matcher, TokenClass)] = &[
    (Matcher::Keywords(SIZE_KEYWORDS), TokenClass::Size),
    (Matcher::Keywords(SIZE_COMPARE_KEYWORDS), TokenClass::Size),
    (Matcher::Pattern(&SIZE_RE), TokenClass::Size),
    (Matcher::Keywords(&["italic"]), TokenClass::Italic),
    (Matcher::Keywords(&["oblique"]), TokenClass::Oblique),
    (Matcher::Keywords(&["small-caps"]), TokenClass::SmallCaps),
    (Matcher::Keywords(WEIGHT_KEYWORDS), TokenClass::WeightKeyword),
    (Matcher::Pattern(&NUMBER_RE), TokenClass::WeightNumber),
    (Matcher::Keywords(STRETCH_KEYWORDS), TokenClass::Stretch),
];

/// Classify a token from the variation section.
///
/// Returns `None` for tokens that belong to no longhand; callers drop those.
pub(crate) fn classify(token: &str) -> Option<TokenClass> {
    VARIATION_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(token))
        .map(|&(_, class)| class)
}

/// Whether a bare numeric token is an acceptable weight.
pub(crate) fn is_weight_in_range(token: &str) -> bool {
    token
        .parse::<f64>()
        .is_ok_and(|n| (1.0..=1000.0).contains(&n))
}

pub(crate) fn is_angle(token: &str) -> bool {
    ANGLE_RE.is_match(token)
}

pub(crate) fn is_line_height(token: &str) -> bool {
    LINE_HEIGHT_RE.is_match(token)
}
