//! # font-shorthand
//!
//! A small, fast parser for the CSS `font` shorthand property.
//!
//! ## Features
//!
//! - Splits a shorthand into family list, size, style, variant, weight,
//!   stretch and line-height
//! - Keeps every value exactly as written, including quoted family names
//!   with their escapes
//! - Unquoted family names are checked against CSS identifier rules
//! - Optional `serde` mapping (`font-family`, `font-size`, ...) and CSS
//!   re-serialization
//!
//! ## Quick Start
//!
//! ```
//! use font_shorthand::{parse, Error};
//!
//! let font = parse("italic small-caps bold 12px/30px Georgia, serif").unwrap();
//! assert_eq!(font.family, ["Georgia", "serif"]);
//! assert_eq!(font.size, "12px");
//! assert_eq!(font.style.as_deref(), Some("italic"));
//! assert_eq!(font.line_height.as_deref(), Some("30px"));
//!
//! // Size and at least one family are required.
//! assert_eq!(parse("bold serif"), Err(Error::InvalidShorthand));
//! ```
//!
//! ## Longhands
//!
//! ```
//! use font_shorthand::{FontShorthand, Longhand, ToCss};
//!
//! let font: FontShorthand = "bold 1em 'Comic Sans MS', cursive".parse().unwrap();
//! assert_eq!(font.get(Longhand::FontWeight).as_deref(), Some("bold"));
//! assert_eq!(font.get(Longhand::LineHeight), None);
//! assert_eq!(font.to_css_string(), "bold 1em 'Comic Sans MS', cursive");
//! ```

pub mod error;
pub mod font;
pub(crate) mod parse;
pub mod to_css;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use font::{FontShorthand, Longhand};
pub use to_css::ToCss;

/// Parse a CSS `font` shorthand value.
///
/// Fails with [`Error::UnclosedQuote`] if a quoted family is never closed and
/// with [`Error::InvalidShorthand`] for anything else that does not yield a
/// size and at least one family.
pub fn parse(input: &str) -> Result<FontShorthand> {
    parse::parse_font(input)
}
