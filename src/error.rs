//! Error types for font shorthand parsing.

use thiserror::Error;

/// Errors that can occur while parsing a `font` shorthand value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A quoted family name was opened but never closed.
    ///
    /// `offset` is the byte offset of the opening quote in the input.
    #[error("unclosed quote {quote:?} at offset {offset}")]
    UnclosedQuote { quote: char, offset: usize },

    /// The value does not form a valid shorthand (missing size or family,
    /// or trailing text glued onto a quoted family).
    #[error("wasn't able to parse font shorthand")]
    InvalidShorthand,
}

pub type Result<T> = std::result::Result<T, Error>;
