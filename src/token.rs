//! JS token model
//!
//! Tokens are immutable, positioned slices of an already-scanned source
//! buffer. The scanner (external to this crate) decides where a token
//! starts and ends; this module classifies token types, exposes the
//! derived category, and decodes literal values on demand via the
//! [`crate::literal`] decoders.
//!
//! Token type and category are generated from a single
//! `define_token_types!` table. Every type tag appears exactly once
//! with exactly one category, and both `name()` and `category()` are
//! exhaustive matches, so the two mappings cannot drift apart.

use crate::error::{Position, StringValueError};
use crate::literal::{self, StringValue};

/// Coarse classification of a token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenCategory {
    /// Tokens that do not belong to the grammar (also `Eof`)
    Invalid,
    /// Numeric literals
    Number,
    /// String, template and regex literal parts
    String,
    /// Structural punctuation
    Punctuation,
    /// Operators
    Operator,
    /// Reserved words
    Keyword,
    /// Reserved words that steer control flow
    ControlKeyword,
    /// Identifiers and identifier-like tokens
    Identifier,
}

macro_rules! define_token_types {
    ($($name:ident => $category:ident),* $(,)?) => {
        /// JS token type tags
        ///
        /// A closed enumeration; the parser matches on these and relies
        /// on [`TokenType::category`] for coarse grouping.
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

            /// Returns the category this token type belongs to
            pub fn category(self) -> TokenCategory {
                match self {
                    $( TokenType::$name => TokenCategory::$category, )*
                }
            }
        }
    };
}

define_token_types! {
    Ampersand => Operator,
    AmpersandEquals => Operator,
    Arrow => Operator,
    Asterisk => Operator,
    AsteriskEquals => Operator,
    Async => Keyword,
    Await => Keyword,
    BigIntLiteral => Number,
    BoolLiteral => Keyword,
    BracketClose => Punctuation,
    BracketOpen => Punctuation,
    Break => Keyword,
    Caret => Operator,
    CaretEquals => Operator,
    Case => ControlKeyword,
    Catch => ControlKeyword,
    Class => Keyword,
    Colon => Punctuation,
    Comma => Punctuation,
    Const => Keyword,
    Continue => ControlKeyword,
    CurlyClose => Punctuation,
    CurlyOpen => Punctuation,
    Debugger => Keyword,
    Default => ControlKeyword,
    Delete => Keyword,
    Do => ControlKeyword,
    DoubleAmpersand => Operator,
    DoubleAmpersandEquals => Operator,
    DoubleAsterisk => Operator,
    DoubleAsteriskEquals => Operator,
    DoublePipe => Operator,
    DoublePipeEquals => Operator,
    DoubleQuestionMark => Operator,
    DoubleQuestionMarkEquals => Operator,
    Else => ControlKeyword,
    Enum => Keyword,
    Eof => Invalid,
    Equals => Operator,
    EqualsEquals => Operator,
    EqualsEqualsEquals => Operator,
    EscapedKeyword => Identifier,
    ExclamationMark => Operator,
    ExclamationMarkEquals => Operator,
    ExclamationMarkEqualsEquals => Operator,
    Export => Keyword,
    Extends => Keyword,
    Finally => ControlKeyword,
    For => ControlKeyword,
    Function => Keyword,
    GreaterThan => Operator,
    GreaterThanEquals => Operator,
    Identifier => Identifier,
    If => ControlKeyword,
    Implements => Keyword,
    Import => Keyword,
    In => Keyword,
    Instanceof => Keyword,
    Interface => Keyword,
    Invalid => Invalid,
    LessThan => Operator,
    LessThanEquals => Operator,
    Let => Keyword,
    Minus => Operator,
    MinusEquals => Operator,
    MinusMinus => Operator,
    New => Keyword,
    NullLiteral => Keyword,
    NumericLiteral => Number,
    Package => Keyword,
    ParenClose => Punctuation,
    ParenOpen => Punctuation,
    Percent => Operator,
    PercentEquals => Operator,
    Period => Operator,
    Pipe => Operator,
    PipeEquals => Operator,
    Plus => Operator,
    PlusEquals => Operator,
    PlusPlus => Operator,
    Private => Keyword,
    PrivateIdentifier => Identifier,
    Protected => Keyword,
    Public => Keyword,
    QuestionMark => Operator,
    QuestionMarkPeriod => Operator,
    RegexFlags => String,
    RegexLiteral => String,
    Return => ControlKeyword,
    Semicolon => Punctuation,
    ShiftLeft => Operator,
    ShiftLeftEquals => Operator,
    ShiftRight => Operator,
    ShiftRightEquals => Operator,
    Slash => Operator,
    SlashEquals => Operator,
    Static => Keyword,
    StringLiteral => String,
    Super => Keyword,
    Switch => ControlKeyword,
    TemplateLiteralEnd => String,
    TemplateLiteralExprEnd => Punctuation,
    TemplateLiteralExprStart => Punctuation,
    TemplateLiteralStart => String,
    TemplateLiteralString => String,
    This => Keyword,
    Throw => ControlKeyword,
    Tilde => Operator,
    TripleDot => Operator,
    Try => ControlKeyword,
    Typeof => Keyword,
    UnsignedShiftRight => Operator,
    UnsignedShiftRightEquals => Operator,
    UnterminatedRegexLiteral => String,
    UnterminatedStringLiteral => String,
    UnterminatedTemplateLiteral => String,
    Var => Keyword,
    Void => Keyword,
    While => ControlKeyword,
    With => ControlKeyword,
    Yield => ControlKeyword,
}

/// A classified, positioned slice of JS source text
///
/// `value` and `trivia` borrow from the source buffer; a token never
/// owns text. Literal values are decoded lazily through the `*_value`
/// methods, each a pure function of the token, so callers may cache the
/// results however they like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    token_type: TokenType,
    value: &'a str,
    trivia: &'a str,
    position: Position,
}

impl<'a> Token<'a> {
    /// Creates a new token
    ///
    /// `value` is the raw token text (quotes included for string
    /// literals), `trivia` the whitespace/comment run immediately
    /// preceding it, and `position` where the token starts.
    pub fn new(token_type: TokenType, value: &'a str, trivia: &'a str, position: Position) -> Self {
        Self {
            token_type,
            value,
            trivia,
            position,
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

    /// Returns the token's category
    #[inline(always)]
    pub fn category(&self) -> TokenCategory {
        self.token_type.category()
    }

    /// Returns the raw token text
    #[inline(always)]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Returns the trivia preceding the token
    #[inline(always)]
    pub fn trivia(&self) -> &'a str {
        self.trivia
    }

    /// Returns the position at which the token starts
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Decodes the numeric value of a `NumericLiteral` token
    ///
    /// # Panics
    ///
    /// Panics if the token is not a `NumericLiteral`.
    pub fn double_value(&self) -> f64 {
        assert_eq!(
            self.token_type,
            TokenType::NumericLiteral,
            "double_value called on a {} token",
            self.name()
        );
        literal::numeric_literal_value(self.value)
    }

    /// Decodes the text value of a `StringLiteral` or
    /// `TemplateLiteralString` token
    ///
    /// String literals have their surrounding quotes stripped before
    /// decoding; template literal strings are decoded as-is.
    ///
    /// # Panics
    ///
    /// Panics if the token is neither a `StringLiteral` nor a
    /// `TemplateLiteralString`.
    pub fn string_value(&self) -> Result<StringValue, StringValueError> {
        let contents = match self.token_type {
            TokenType::StringLiteral => {
                // Both quotes are part of the raw text
                assert!(self.value.len() >= 2, "string literal shorter than its quotes");
                &self.value[1..self.value.len() - 1]
            }
            TokenType::TemplateLiteralString => self.value,
            _ => panic!("string_value called on a {} token", self.name()),
        };
        literal::string_literal_value(contents)
    }

    /// Decodes the value of a `BoolLiteral` token
    ///
    /// # Panics
    ///
    /// Panics if the token is not a `BoolLiteral`.
    pub fn bool_value(&self) -> bool {
        assert_eq!(
            self.token_type,
            TokenType::BoolLiteral,
            "bool_value called on a {} token",
            self.name()
        );
        literal::bool_literal_value(self.value)
    }

    /// Returns true if the token is an identifier name
    ///
    /// IdentifierNames are Identifiers plus ReservedWords. The standard
    /// defines this the other way around (Identifiers are
    /// IdentifierNames minus reserved words):
    /// https://tc39.es/ecma262/#prod-Identifier
    pub fn is_identifier_name(&self) -> bool {
        matches!(
            self.token_type,
            TokenType::Identifier
                | TokenType::Await
                | TokenType::BoolLiteral
                | TokenType::Break
                | TokenType::Case
                | TokenType::Catch
                | TokenType::Class
                | TokenType::Const
                | TokenType::Continue
                | TokenType::Debugger
                | TokenType::Default
                | TokenType::Delete
                | TokenType::Do
                | TokenType::Else
                | TokenType::Enum
                | TokenType::Export
                | TokenType::Extends
                | TokenType::Finally
                | TokenType::For
                | TokenType::Function
                | TokenType::If
                | TokenType::Import
                | TokenType::In
                | TokenType::Instanceof
                | TokenType::Let
                | TokenType::New
                | TokenType::NullLiteral
                | TokenType::Return
                | TokenType::Super
                | TokenType::Switch
                | TokenType::This
                | TokenType::Throw
                | TokenType::Try
                | TokenType::Typeof
                | TokenType::Var
                | TokenType::Void
                | TokenType::While
                | TokenType::With
                | TokenType::Yield
        )
    }

    /// Returns true if the token's trivia contains a line terminator
    ///
    /// Used by the parser for automatic-semicolon-insertion style rules;
    /// this only detects, the parser decides.
    pub fn trivia_contains_line_terminator(&self) -> bool {
        self.trivia.chars().any(crate::chars::is_line_terminator)
    }
}
