//! # Lexcore
//!
//! Lexical-analysis core shared by two independent language front ends:
//! a JavaScript-compatible token model that resolves literal *values*
//! (numeric, string, boolean) out of raw token text, and a pattern
//! lexer for a regular-expression dialect that classifies characters
//! into structural tokens for a downstream regex parser.
//!
//! ## Overview
//!
//! The two subsystems are structurally analogous but independent; they
//! share nothing at runtime:
//!
//! - **JS token model** ([`token`], [`literal`]): token type/category
//!   classification plus on-demand literal value decoders operating on
//!   token text already sliced by an upstream scanner. ECMA-262
//!   semantics throughout: surrogate-pair combination, legacy octal
//!   escapes, numeric radix detection, digit separators.
//! - **Regex lexer** ([`regex`]): a mutable cursor over a pattern
//!   buffer, producing a pull-based token stream with bounded
//!   backtracking (`back`, `reset`) for speculative grammar parsing.
//!
//! Both transform an immutable source buffer into typed tokens with
//! positional spans, never copy token text during scanning, and report
//! malformed input through recoverable status values rather than
//! panics. Panics are reserved for violated preconditions that indicate
//! a bug in the upstream scanner or parser.
//!
//! ## Decoding literal values
//!
//! ```rust
//! use lexcore::{Position, Token, TokenType};
//!
//! let number = Token::new(TokenType::NumericLiteral, "0x1A", "", Position::new());
//! assert_eq!(number.double_value(), 26.0);
//!
//! let string = Token::new(TokenType::StringLiteral, r#""he\tllo""#, "", Position::new());
//! let decoded = string.string_value().unwrap();
//! assert_eq!(decoded.value, "he\tllo");
//! ```
//!
//! Malformed escapes are caller-visible outcomes, not faults:
//!
//! ```rust
//! use lexcore::{string_literal_value, StringValueError};
//!
//! let result = string_literal_value(r"\x4");
//! assert_eq!(result, Err(StringValueError::MalformedHexEscape { offset: 0 }));
//! ```
//!
//! ## Scanning a regex pattern
//!
//! ```rust
//! use lexcore::regex::{Lexer, TokenType};
//!
//! let mut lexer = Lexer::new(r"a(b)\.");
//! assert_eq!(lexer.next().token_type(), TokenType::Char);
//! assert_eq!(lexer.next().token_type(), TokenType::LeftParen);
//! assert_eq!(lexer.next().token_type(), TokenType::Char);
//! assert_eq!(lexer.next().token_type(), TokenType::RightParen);
//! assert_eq!(lexer.next().token_type(), TokenType::EscapeSequence);
//! assert_eq!(lexer.next().token_type(), TokenType::Eof);
//! ```
//!
//! ## Concurrency
//!
//! The value decoders are pure functions and safe to call concurrently
//! on different tokens. A [`regex::Lexer`] is a single-owner mutable
//! cursor; create one per pattern buffer and keep it on one thread.
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` on the public enum types

pub mod chars;
pub mod error;
pub mod literal;
pub mod regex;
pub mod token;

// Re-export the JS token model at the crate root; the regex subsystem
// stays module-qualified since its Token/TokenType names mirror these.
pub use error::{Position, StringValueError};
pub use literal::{
    StringValue, StringValueStatus, bool_literal_value, numeric_literal_value,
    string_literal_value,
};
pub use token::{Token, TokenCategory, TokenType};
