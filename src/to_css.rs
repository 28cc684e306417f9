//! Serialization back to CSS text.

use crate::font::FontShorthand;

/// Types that can be written as CSS.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// Emit an optional longhand followed by a separating space.
macro_rules! emit_if_some {
    ($buf:expr, $value:expr) => {
        if let Some(value) = &$value {
            $buf.push_str(value);
            $buf.push(' ');
        }
    };
}

impl ToCss for FontShorthand {
    /// Canonical shorthand:
    /// `[style] [variant] [weight] [stretch] size[/line-height] family[, family]*`.
    fn to_css(&self, buf: &mut String) {
        emit_if_some!(buf, self.style);
        // `oblique 12px/1.5` would read `12px/1.5` as a candidate angle and
        // lose the size; a dropped keyword keeps them apart.
        if self.style.as_deref() == Some("oblique")
            && self.variant.is_none()
            && self.weight.is_none()
            && self.stretch.is_none()
            && self.line_height.is_some()
        {
            buf.push_str("normal ");
        }
        emit_if_some!(buf, self.variant);
        emit_if_some!(buf, self.weight);
        emit_if_some!(buf, self.stretch);

        buf.push_str(&self.size);
        if let Some(line_height) = &self.line_height {
            buf.push('/');
            buf.push_str(line_height);
        }

        for (i, family) in self.family.iter().enumerate() {
            buf.push_str(if i == 0 { " " } else { ", " });
            buf.push_str(family);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal() {
        let font = FontShorthand::parse("12px serif").unwrap();
        assert_eq!(font.to_css_string(), "12px serif");
    }

    #[test]
    fn test_reorders_into_canonical_form() {
        let font =
            FontShorthand::parse("condensed bold small-caps oblique 10deg 1em/2 'A B', serif")
                .unwrap();
        assert_eq!(
            font.to_css_string(),
            "oblique 10deg small-caps bold condensed 1em/2 'A B', serif"
        );
        assert_eq!(font.to_string(), font.to_css_string());
    }

    #[test]
    fn test_normalizes_identifier_spacing() {
        let font = FontShorthand::parse("12px Lucida    Grande ,serif").unwrap();
        assert_eq!(font.to_css_string(), "12px Lucida Grande, serif");
    }

    #[test]
    fn test_bare_oblique_before_line_height() {
        let font = FontShorthand {
            family: vec!["a".to_string()],
            size: "0px".to_string(),
            style: Some("oblique".to_string()),
            variant: None,
            weight: None,
            stretch: None,
            line_height: Some("1.5".to_string()),
        };
        assert_eq!(font.to_css_string(), "oblique normal 0px/1.5 a");
        assert_eq!(FontShorthand::parse(&font.to_css_string()).unwrap(), font);

        let font = FontShorthand::parse("oblique 12px a").unwrap();
        assert_eq!(font.to_css_string(), "oblique 12px a");

        let font = FontShorthand::parse("oblique bold 12px/2 a").unwrap();
        assert_eq!(font.to_css_string(), "oblique bold 12px/2 a");
    }

    #[test]
    fn test_output_parses_back() {
        for input in [
            "italic small-caps bold 12px/30px Georgia, serif",
            r#"1e3 larger "Times\" New", Arial"#,
            "oblique 0.02turn ultra-expanded 100%/105% Ahem\\!",
            "oblique 0 12px/1.5 serif",
            "oblique normal 12px/2 serif",
        ] {
            let font = FontShorthand::parse(input).unwrap();
            assert_eq!(FontShorthand::parse(&font.to_css_string()).unwrap(), font);
        }
    }
}
