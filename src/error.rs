//! Error types and position tracking
//!
//! The crate deliberately has two error regimes. Malformed escape
//! sequences inside string literals are recoverable and surface as
//! [`StringValueError`] values for the parser to report. Violated
//! preconditions (decoding a literal the upstream scanner never
//! validated, rewinding the regex lexer past the start of its buffer)
//! indicate a bug in the caller and panic instead of returning a wrong
//! value.

use std::fmt;
use thiserror::Error;

/// Represents a position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Byte offset from start of input (0-based)
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of input
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advances the position by one character
    ///
    /// All four ECMAScript line terminators (`\n`, `\r`, U+2028, U+2029)
    /// start a new line; everything else advances the column.
    pub fn advance(&mut self, c: char) {
        if crate::chars::is_line_terminator(c) {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += c.len_utf8();
    }

    /// Advances the position by multiple characters
    pub fn advance_by(&mut self, text: &str) {
        for c in text.chars() {
            self.advance(c);
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Recoverable failures while decoding a string literal's value
///
/// Each variant carries the byte offset of the failing escape within the
/// decoded contents (quotes already stripped for plain string literals).
/// Any of these means the literal's text violates the grammar and the
/// enclosing program must be rejected; the partially decoded value is
/// discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringValueError {
    /// A `\x` escape without two following hex digits
    #[error("malformed hex escape sequence at offset {offset}")]
    MalformedHexEscape {
        /// Byte offset of the failing escape within the literal contents
        offset: usize,
    },

    /// A `\u` escape with bad hex digits or a bad brace form
    #[error("malformed unicode escape sequence at offset {offset}")]
    MalformedUnicodeEscape {
        /// Byte offset of the failing escape within the literal contents
        offset: usize,
    },

    /// A `\u{...}` escape whose value overflowed the accumulator
    #[error("unicode escape sequence overflow at offset {offset}")]
    UnicodeEscapeOverflow {
        /// Byte offset of the failing escape within the literal contents
        offset: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_advance() {
        let mut pos = Position::new();
        pos.advance('a');
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, 1);

        pos.advance('\n');
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 2);
    }

    #[test]
    fn test_position_advance_unicode_line_separator() {
        let mut pos = Position::new();
        pos.advance('\u{2028}');
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        // U+2028 is three bytes in UTF-8
        assert_eq!(pos.offset, 3);
    }

    #[test]
    fn test_position_advance_by() {
        let mut pos = Position::new();
        pos.advance_by("ab\ncd");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_error_display() {
        let err = StringValueError::MalformedHexEscape { offset: 4 };
        assert_eq!(err.to_string(), "malformed hex escape sequence at offset 4");
    }
}
