//! Regex pattern lexer
//!
//! A stateful, byte-wise scanner that classifies each position of a
//! regular-expression pattern into a structural token for the pattern
//! parser. The lexer is a single-owner mutable cursor over an immutable
//! source buffer: `next()` pulls one token, `back()`/`reset()` give the
//! parser bounded backtracking for speculative grammar rules.
//!
//! The lexer itself has no fatal error path. A backslash followed by a
//! character that is not a recognized metacharacter is *not* rejected
//! here: it is logged as a diagnostic and the position falls through to
//! ordinary per-character tokenization, leaving semantic rejection to
//! the parser.

use std::fmt;

macro_rules! define_regex_token_types {
    ($($name:ident),* $(,)?) => {
        /// Regex token type tags
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum TokenType {
            $( $name, )*
        }

        impl TokenType {
            /// Returns the stable debug name of this token type
            pub fn name(self) -> &'static str {
                match self {
                    $( TokenType::$name => stringify!($name), )*
                }
            }
        }
    };
}

define_regex_token_types! {
    Eof,
    Char,
    Circumflex,
    Period,
    LeftParen,
    RightParen,
    LeftCurly,
    RightCurly,
    LeftBracket,
    RightBracket,
    Asterisk,
    Plus,
    Pipe,
    Dollar,
    Questionmark,
    Comma,
    Slash,
    EqualSign,
    HyphenMinus,
    Colon,
    EscapeSequence,
}

/// A classified, positioned slice of a regex pattern
///
/// `value` borrows from the pattern buffer; `Eof` tokens carry an empty
/// slice and only a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    token_type: TokenType,
    position: usize,
    value: &'a [u8],
}

impl<'a> Token<'a> {
    /// Creates a new token
    pub fn new(token_type: TokenType, position: usize, value: &'a [u8]) -> Self {
        Self {
            token_type,
            position,
            value,
        }
    }

    /// Returns the token's type tag
    #[inline(always)]
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Returns the stable debug name of the token's type
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.token_type.name()
    }

    /// Returns the byte offset at which the token starts
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the raw token bytes (empty for `Eof`)
    #[inline(always)]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}({:?})",
            self.name(),
            self.position,
            String::from_utf8_lossy(self.value)
        )
    }
}

/// Byte-wise lexer over a regex pattern
///
/// Created once per pattern buffer and owned by a single parser; the
/// cursor is mutated by every scan step, so it must not be shared
/// across concurrent callers.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The immutable pattern buffer
    source: &'a [u8],
    /// Next unread byte offset
    position: usize,
    /// Offset of the last consumed byte; used to compute token spans
    previous_position: usize,
    /// The byte consumed most recently, if any
    current_char: Option<u8>,
    /// The token produced by the most recent `next()` call
    current_token: Token<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over a pattern string
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Creates a lexer over raw pattern bytes
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            previous_position: 0,
            current_char: None,
            current_token: Token::new(TokenType::Eof, 0, &[]),
        }
    }

    /// Returns the underlying pattern bytes
    #[inline(always)]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Returns the token produced by the most recent `next()` call
    #[inline(always)]
    pub fn current_token(&self) -> Token<'a> {
        self.current_token
    }

    /// Returns the byte consumed most recently, if any
    #[inline(always)]
    pub fn current_char(&self) -> Option<u8> {
        self.current_char
    }

    /// Looks ahead `offset` bytes without consuming
    ///
    /// Returns `None` at or past the end of the pattern.
    #[inline(always)]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Advances the cursor by one byte
    ///
    /// Consuming at end of input parks the cursor one past the buffer
    /// and clears the current byte; further consumes are no-ops there.
    pub fn consume(&mut self) {
        self.previous_position = self.position;

        if self.position >= self.source.len() {
            self.position = self.source.len() + 1;
            self.current_char = None;
            return;
        }

        self.current_char = Some(self.source[self.position]);
        self.position += 1;
    }

    /// Rewinds the cursor by `offset` bytes
    ///
    /// Used by the parser to recover from failed speculative lookahead.
    /// Rewinding by `position + 1` clamps to `position`: offset 0 of the
    /// buffer occurs twice, once before and once after the first byte is
    /// consumed.
    ///
    /// # Panics
    ///
    /// Panics when asked to rewind past the start of the buffer; only
    /// the lexer's own parser calls this, so an out-of-bounds rewind is
    /// a programmer error rather than a runtime condition.
    pub fn back(&mut self, offset: usize) {
        let offset = if offset == self.position + 1 {
            self.position
        } else {
            offset
        };

        assert!(
            offset <= self.position,
            "cannot rewind the lexer past the start of the pattern"
        );
        if offset == 0 {
            return;
        }

        self.position -= offset;
        self.previous_position = self.position.saturating_sub(1);
        self.current_char = self.source.get(self.position).copied();
    }

    /// Returns the cursor to the start of the buffer
    ///
    /// Clears the cached current token back to `Eof` so a two-pass
    /// parser can rescan the pattern from scratch.
    pub fn reset(&mut self) {
        self.position = 0;
        self.previous_position = 0;
        self.current_char = None;
        self.current_token = Token::new(TokenType::Eof, 0, &[]);
    }

    /// Consumes the next byte if it equals `expected`
    pub fn try_skip(&mut self, expected: u8) -> bool {
        if self.peek(0) != Some(expected) {
            return false;
        }
        self.consume();
        true
    }

    /// Consumes and returns the next byte
    ///
    /// # Panics
    ///
    /// Panics at end of input; callers check with `peek` first.
    pub fn skip(&mut self) -> u8 {
        let ch = self.peek(0).expect("skip called at end of input");
        self.consume();
        ch
    }

    /// Produces the next token
    ///
    /// Single-character structural tokens are emitted immediately. A
    /// backslash triggers escape lookahead: a recognized metacharacter
    /// after it produces a two-byte `EscapeSequence`; anything else is
    /// logged and the backslash degrades to an ordinary `Char` token.
    /// At end of input this repeatedly yields a zero-length `Eof` token.
    pub fn next(&mut self) -> Token<'a> {
        while self.position <= self.source.len() {
            let Some(ch) = self.peek(0) else {
                break;
            };

            let single_char_token = match ch {
                b'(' => Some(TokenType::LeftParen),
                b')' => Some(TokenType::RightParen),
                b'{' => Some(TokenType::LeftCurly),
                b'}' => Some(TokenType::RightCurly),
                b'[' => Some(TokenType::LeftBracket),
                b']' => Some(TokenType::RightBracket),
                b'.' => Some(TokenType::Period),
                b'*' => Some(TokenType::Asterisk),
                b'+' => Some(TokenType::Plus),
                b'$' => Some(TokenType::Dollar),
                b'^' => Some(TokenType::Circumflex),
                b'|' => Some(TokenType::Pipe),
                b'?' => Some(TokenType::Questionmark),
                b',' => Some(TokenType::Comma),
                b'/' => Some(TokenType::Slash),
                b'=' => Some(TokenType::EqualSign),
                b':' => Some(TokenType::Colon),
                b'-' => Some(TokenType::HyphenMinus),
                _ => None,
            };
            if let Some(token_type) = single_char_token {
                return self.emit_token(token_type);
            }

            if ch == b'\\' {
                let escape_length = self.match_escape_sequence();
                if escape_length > 0 {
                    let token_start = self.position;
                    for _ in 0..escape_length {
                        self.consume();
                    }
                    return self.commit_token(TokenType::EscapeSequence, token_start);
                }
            }

            return self.emit_token(TokenType::Char);
        }

        Token::new(TokenType::Eof, self.position, &[])
    }

    /// Emits a single-byte token at the current position and advances
    fn emit_token(&mut self, token_type: TokenType) -> Token<'a> {
        let token = Token::new(
            token_type,
            self.position,
            &self.source[self.position..self.position + 1],
        );
        self.current_token = token;
        self.consume();
        token
    }

    /// Commits a multi-byte token spanning from `token_start` through
    /// the byte consumed most recently
    fn commit_token(&mut self, token_type: TokenType, token_start: usize) -> Token<'a> {
        let end = self.previous_position + 1;
        debug_assert!(end <= self.source.len());
        let token = Token::new(token_type, token_start, &self.source[token_start..end]);
        self.current_token = token;
        token
    }

    /// Returns the length of the escape sequence at the cursor, or 0
    ///
    /// Only escapes of the fixed metacharacter set are recognized at the
    /// lexer level; everything else falls through to per-character
    /// tokenization and the parser decides whether it is valid.
    fn match_escape_sequence(&self) -> usize {
        match self.peek(1) {
            Some(
                b'^' | b'.' | b'[' | b']' | b'$' | b'(' | b')' | b'|' | b'*' | b'+' | b'?' | b'{'
                | b'\\',
            ) => 2,
            Some(invalid) => {
                tracing::debug!(
                    "found invalid escape sequence: \\{} (the parser will have to deal with this!)",
                    invalid as char
                );
                0
            }
            None => 0,
        }
    }
}
