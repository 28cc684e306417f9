//! The `font` shorthand state machine.
//!
//! A single left-to-right pass over the input. Each position is dispatched to
//! the handler for the current [`ParseState`]; handlers append to a token
//! buffer, commit finished tokens to the result and pick the next state.

use memchr::memchr;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::font::FontShorthand;

use super::ident::parse_identifier;
use super::tokens::{TokenClass, classify, is_angle, is_line_height, is_weight_in_range};

/// Where the parser is within the shorthand grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseState {
    /// Style, variant, weight, stretch and size tokens in any order.
    Variation,
    /// Token after `size/`.
    LineHeight,
    /// After a quoted family, waiting for the next comma.
    FontFamily,
    /// Start of a family entry.
    BeforeFontFamily,
    /// Token after `oblique`, which may be an angle.
    AfterOblique,
}

/// What the driver does with the cursor after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    /// Move past the current character.
    Next,
    /// Process the current character again in the new state.
    Repeat,
    /// Jump to a byte offset.
    To(usize),
}

/// Longhand values collected so far.
#[derive(Debug, Default)]
struct Partial {
    family: Vec<String>,
    size: Option<String>,
    style: Option<String>,
    variant: Option<String>,
    weight: Option<String>,
    stretch: Option<String>,
    line_height: Option<String>,
}

/// Parser for one shorthand value. Consumed by [`ShorthandParser::parse`].
pub(crate) struct ShorthandParser<'a> {
    input: &'a str,
    state: ParseState,
    buffer: String,
    font: Partial,
}

impl<'a> ShorthandParser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            state: ParseState::Variation,
            buffer: String::new(),
            font: Partial::default(),
        }
    }

    /// Run the state machine to completion.
    pub(crate) fn parse(mut self) -> Result<FontShorthand> {
        let mut pos = 0;
        while let Some(c) = self.input[pos..].chars().next() {
            let advance = match self.state {
                ParseState::Variation => self.variation(c),
                ParseState::LineHeight => self.line_height(c),
                ParseState::FontFamily => self.font_family(c),
                ParseState::BeforeFontFamily => self.before_font_family(c, pos)?,
                ParseState::AfterOblique => self.after_oblique(c),
            };
            pos = match advance {
                Advance::Next => pos + c.len_utf8(),
                Advance::Repeat => pos,
                Advance::To(next) => next,
            };
        }

        self.finish()
    }

    fn set_state(&mut self, state: ParseState) {
        if self.state != state {
            trace!(from = ?self.state, to = ?state, "font shorthand state change");
            self.state = state;
        }
    }

    /// Take the buffered token, leaving the buffer empty.
    fn take_token(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn variation(&mut self, c: char) -> Advance {
        if c != ' ' && c != '/' {
            self.buffer.push(c);
            return Advance::Next;
        }

        let token = self.take_token();
        match classify(&token) {
            Some(TokenClass::Size) => {
                self.font.size = Some(token);
                self.set_state(if c == '/' {
                    ParseState::LineHeight
                } else {
                    ParseState::BeforeFontFamily
                });
            }
            Some(TokenClass::Italic) => self.font.style = Some(token),
            Some(TokenClass::Oblique) => {
                self.font.style = Some(token);
                self.set_state(ParseState::AfterOblique);
            }
            Some(TokenClass::SmallCaps) => self.font.variant = Some(token),
            Some(TokenClass::WeightKeyword) => self.font.weight = Some(token),
            Some(TokenClass::WeightNumber) => {
                if is_weight_in_range(&token) {
                    self.font.weight = Some(token);
                } else {
                    trace!(%token, "numeric weight out of range");
                }
            }
            Some(TokenClass::Stretch) => self.font.stretch = Some(token),
            None => trace!(%token, "ignoring unrecognized token"),
        }
        Advance::Next
    }

    fn after_oblique(&mut self, c: char) -> Advance {
        if c != ' ' {
            self.buffer.push(c);
            return Advance::Next;
        }

        self.set_state(ParseState::Variation);
        if !is_angle(&self.buffer) {
            // Not an angle: hand the token back to the variation section.
            return Advance::Repeat;
        }

        let angle = self.take_token();
        if let Some(style) = self.font.style.as_mut() {
            style.push(' ');
            style.push_str(&angle);
        }
        Advance::Next
    }

    fn line_height(&mut self, c: char) -> Advance {
        if c != ' ' {
            self.buffer.push(c);
            return Advance::Next;
        }

        let token = self.take_token();
        if is_line_height(&token) {
            self.font.line_height = Some(token);
        } else {
            trace!(%token, "dropping line height");
        }
        self.set_state(ParseState::BeforeFontFamily);
        Advance::Next
    }

    fn before_font_family(&mut self, c: char, pos: usize) -> Result<Advance> {
        match c {
            '"' | '\'' => {
                let end = self.closing_quote(c, pos)?;
                self.font.family.push(self.input[pos..=end].to_string());
                self.buffer.clear();
                self.set_state(ParseState::FontFamily);
                Ok(Advance::To(end + 1))
            }
            ',' => {
                let token = self.take_token();
                if let Some(name) = parse_identifier(&token) {
                    self.font.family.push(name);
                }
                Ok(Advance::Next)
            }
            _ => {
                self.buffer.push(c);
                Ok(Advance::Next)
            }
        }
    }

    fn font_family(&mut self, c: char) -> Advance {
        if c == ',' {
            self.buffer.clear();
            self.set_state(ParseState::BeforeFontFamily);
        } else {
            self.buffer.push(c);
        }
        Advance::Next
    }

    /// Find the byte offset of the quote closing the one at `open`.
    ///
    /// A quote directly preceded by a backslash is escaped and skipped.
    fn closing_quote(&self, quote: char, open: usize) -> Result<usize> {
        let bytes = self.input.as_bytes();
        let mut from = open + 1;
        loop {
            let Some(found) = memchr(quote as u8, &bytes[from..]) else {
                debug!(offset = open, "unclosed quote in font family");
                return Err(Error::UnclosedQuote {
                    quote,
                    offset: open,
                });
            };
            let end = from + found;
            if bytes[end - 1] != b'\\' {
                return Ok(end);
            }
            from = end + 1;
        }
    }

    /// Apply the end-of-input rules and build the result.
    fn finish(mut self) -> Result<FontShorthand> {
        match self.state {
            ParseState::FontFamily => {
                if !self.buffer.chars().all(|c| c.is_ascii_whitespace()) {
                    debug!(trailing = %self.buffer, "text after quoted font family");
                    return Err(Error::InvalidShorthand);
                }
            }
            ParseState::BeforeFontFamily => {
                let token = self.take_token();
                if let Some(name) = parse_identifier(&token) {
                    self.font.family.push(name);
                }
            }
            _ => {}
        }

        let Partial {
            family,
            size,
            style,
            variant,
            weight,
            stretch,
            line_height,
        } = self.font;

        match size {
            Some(size) if !family.is_empty() => Ok(FontShorthand {
                family,
                size,
                style,
                variant,
                weight,
                stretch,
                line_height,
            }),
            _ => {
                debug!(input = self.input, state = ?self.state, "font shorthand missing size or family");
                Err(Error::InvalidShorthand)
            }
        }
    }
}
