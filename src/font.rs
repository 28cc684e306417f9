//! The parsed `font` shorthand and its longhand projection.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parse::parse_font;
use crate::to_css::ToCss;

/// Longhand properties set by the `font` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Longhand {
    FontStyle,
    FontVariant,
    FontWeight,
    FontStretch,
    FontSize,
    LineHeight,
    FontFamily,
}

impl Longhand {
    /// All longhands, in shorthand order.
    pub const ALL: [Longhand; 7] = [
        Longhand::FontStyle,
        Longhand::FontVariant,
        Longhand::FontWeight,
        Longhand::FontStretch,
        Longhand::FontSize,
        Longhand::LineHeight,
        Longhand::FontFamily,
    ];

    /// Returns the CSS property name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Longhand::FontStyle => "font-style",
            Longhand::FontVariant => "font-variant",
            Longhand::FontWeight => "font-weight",
            Longhand::FontStretch => "font-stretch",
            Longhand::FontSize => "font-size",
            Longhand::LineHeight => "line-height",
            Longhand::FontFamily => "font-family",
        }
    }

    /// Parse a CSS property name.
    #[inline]
    pub fn from_css(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

impl ToCss for Longhand {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(self.as_str());
    }
}

/// A decomposed `font` shorthand value.
///
/// Values are kept exactly as written: `size` is `"12px"`, not a number, and
/// quoted families keep their quotes and escapes. A successful parse always
/// has a size and at least one family; deserialization enforces the same.
///
/// ```
/// use font_shorthand::FontShorthand;
///
/// let font: FontShorthand = "italic bold 12px/30px Georgia, serif".parse().unwrap();
/// assert_eq!(font.size, "12px");
/// assert_eq!(font.family, ["Georgia", "serif"]);
/// assert_eq!(font.weight.as_deref(), Some("bold"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFontShorthand"))]
pub struct FontShorthand {
    #[cfg_attr(feature = "serde", serde(rename = "font-family"))]
    pub family: Vec<String>,

    #[cfg_attr(feature = "serde", serde(rename = "font-size"))]
    pub size: String,

    /// `italic`, `oblique` or `oblique <angle>`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "font-style", default, skip_serializing_if = "Option::is_none")
    )]
    pub style: Option<String>,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "font-variant", default, skip_serializing_if = "Option::is_none")
    )]
    pub variant: Option<String>,

    /// Keyword or the numeric token as written (`"1e3"` stays `"1e3"`).
    #[cfg_attr(
        feature = "serde",
        serde(rename = "font-weight", default, skip_serializing_if = "Option::is_none")
    )]
    pub weight: Option<String>,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "font-stretch", default, skip_serializing_if = "Option::is_none")
    )]
    pub stretch: Option<String>,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "line-height", default, skip_serializing_if = "Option::is_none")
    )]
    pub line_height: Option<String>,
}

/// Unchecked wire form of [`FontShorthand`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFontShorthand {
    #[serde(rename = "font-family")]
    family: Vec<String>,
    #[serde(rename = "font-size")]
    size: String,
    #[serde(rename = "font-style", default)]
    style: Option<String>,
    #[serde(rename = "font-variant", default)]
    variant: Option<String>,
    #[serde(rename = "font-weight", default)]
    weight: Option<String>,
    #[serde(rename = "font-stretch", default)]
    stretch: Option<String>,
    #[serde(rename = "line-height", default)]
    line_height: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFontShorthand> for FontShorthand {
    type Error = Error;

    fn try_from(raw: RawFontShorthand) -> Result<Self> {
        if raw.family.is_empty() || raw.size.is_empty() {
            return Err(Error::InvalidShorthand);
        }
        Ok(FontShorthand {
            family: raw.family,
            size: raw.size,
            style: raw.style,
            variant: raw.variant,
            weight: raw.weight,
            stretch: raw.stretch,
            line_height: raw.line_height,
        })
    }
}

impl FontShorthand {
    /// Parse a `font` shorthand value.
    pub fn parse(input: &str) -> Result<Self> {
        parse_font(input)
    }

    /// Value of a single longhand, if it was specified.
    ///
    /// `font-family` is rendered as a comma-separated list.
    pub fn get(&self, longhand: Longhand) -> Option<String> {
        match longhand {
            Longhand::FontStyle => self.style.clone(),
            Longhand::FontVariant => self.variant.clone(),
            Longhand::FontWeight => self.weight.clone(),
            Longhand::FontStretch => self.stretch.clone(),
            Longhand::FontSize => Some(self.size.clone()),
            Longhand::LineHeight => self.line_height.clone(),
            Longhand::FontFamily => Some(self.family.join(", ")),
        }
    }

    /// Expand into the longhands that were specified, in shorthand order.
    pub fn to_longhands(&self) -> Vec<(Longhand, String)> {
        Longhand::ALL
            .into_iter()
            .filter_map(|longhand| self.get(longhand).map(|value| (longhand, value)))
            .collect()
    }
}

impl FromStr for FontShorthand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_font(s)
    }
}

impl fmt::Display for FontShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longhand_names_roundtrip() {
        for longhand in Longhand::ALL {
            assert_eq!(Longhand::from_css(longhand.as_str()), Some(longhand));
        }
        assert_eq!(Longhand::from_css("font"), None);
    }

    #[test]
    fn test_to_longhands_skips_unset() {
        let font = FontShorthand::parse("bold 12px/1.5 Arial, serif").unwrap();
        assert_eq!(
            font.to_longhands(),
            vec![
                (Longhand::FontWeight, "bold".to_string()),
                (Longhand::FontSize, "12px".to_string()),
                (Longhand::LineHeight, "1.5".to_string()),
                (Longhand::FontFamily, "Arial, serif".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: FontShorthand = "12px serif".parse().unwrap();
        assert_eq!(parsed, FontShorthand::parse("12px serif").unwrap());
        assert!("serif".parse::<FontShorthand>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_mapping_keys() {
        let font = FontShorthand::parse("italic 12px/30px Georgia, serif").unwrap();
        let json = serde_json::to_value(&font).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "font-family": ["Georgia", "serif"],
                "font-size": "12px",
                "font-style": "italic",
                "line-height": "30px",
            })
        );

        let back: FontShorthand = serde_json::from_value(json).unwrap();
        assert_eq!(back, font);
    }
}
