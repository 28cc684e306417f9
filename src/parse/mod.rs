//! CSS `font` shorthand parsing.

mod ident;
mod shorthand;
mod tokens;

use crate::error::Result;
use crate::font::FontShorthand;

use shorthand::ShorthandParser;

/// Parse a `font` shorthand value into its longhands.
pub(crate) fn parse_font(input: &str) -> Result<FontShorthand> {
    ShorthandParser::new(input).parse()
}
