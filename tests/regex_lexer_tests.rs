//! Integration tests for the regex pattern lexer
//!
//! These cover the pull-based token stream contract: structural
//! classification, escape-sequence lookahead with permissive fallback,
//! repeatable Eof, and the backtracking replay property the pattern
//! parser depends on.

use lexcore::regex::{Lexer, Token, TokenType};

fn scan_types(pattern: &str) -> Vec<TokenType> {
    let mut lexer = Lexer::new(pattern);
    let mut types = Vec::new();
    loop {
        let token = lexer.next();
        let token_type = token.token_type();
        types.push(token_type);
        if token_type == TokenType::Eof {
            return types;
        }
    }
}

#[test]
fn structural_token_sequence() {
    assert_eq!(
        scan_types("a(b)"),
        vec![
            TokenType::Char,
            TokenType::LeftParen,
            TokenType::Char,
            TokenType::RightParen,
            TokenType::Eof,
        ]
    );
}

#[test]
fn quantifiers_and_anchors() {
    assert_eq!(
        scan_types("^a*b+c?$"),
        vec![
            TokenType::Circumflex,
            TokenType::Char,
            TokenType::Asterisk,
            TokenType::Char,
            TokenType::Plus,
            TokenType::Char,
            TokenType::Questionmark,
            TokenType::Dollar,
            TokenType::Eof,
        ]
    );
}

#[test]
fn bounded_quantifier_tokens() {
    assert_eq!(
        scan_types("a{2,3}"),
        vec![
            TokenType::Char,
            TokenType::LeftCurly,
            TokenType::Char,
            TokenType::Comma,
            TokenType::Char,
            TokenType::RightCurly,
            TokenType::Eof,
        ]
    );
}

#[test]
fn character_class_tokens() {
    assert_eq!(
        scan_types("[a-z]"),
        vec![
            TokenType::LeftBracket,
            TokenType::Char,
            TokenType::HyphenMinus,
            TokenType::Char,
            TokenType::RightBracket,
            TokenType::Eof,
        ]
    );
}

#[test]
fn recognized_escape_sequences() {
    let mut lexer = Lexer::new(r"\.");
    let token = lexer.next();
    assert_eq!(token.token_type(), TokenType::EscapeSequence);
    assert_eq!(token.position(), 0);
    assert_eq!(token.value(), br"\.");
    assert_eq!(lexer.next().token_type(), TokenType::Eof);

    // Every metacharacter in the fixed escape set
    for meta in [
        '^', '.', '[', ']', '$', '(', ')', '|', '*', '+', '?', '{', '\\',
    ] {
        let pattern = format!("\\{meta}");
        let mut lexer = Lexer::new(&pattern);
        let token = lexer.next();
        assert_eq!(
            token.token_type(),
            TokenType::EscapeSequence,
            "for \\{meta}"
        );
        assert_eq!(token.value().len(), 2);
    }
}

#[test]
fn unrecognized_escape_degrades_to_char_tokens() {
    // \q is not a lexer-level escape; the backslash and the q come out
    // as two ordinary Char tokens and the parser decides what they mean
    let mut lexer = Lexer::new(r"\q");
    let backslash = lexer.next();
    assert_eq!(backslash.token_type(), TokenType::Char);
    assert_eq!(backslash.value(), br"\");
    let q = lexer.next();
    assert_eq!(q.token_type(), TokenType::Char);
    assert_eq!(q.value(), b"q");
    assert_eq!(lexer.next().token_type(), TokenType::Eof);
}

#[test]
fn trailing_backslash_is_a_char_token() {
    assert_eq!(
        scan_types("a\\"),
        vec![TokenType::Char, TokenType::Char, TokenType::Eof]
    );
}

#[test]
fn eof_token_is_zero_length_and_repeatable() {
    let mut lexer = Lexer::new("ab");
    lexer.next();
    lexer.next();
    for _ in 0..4 {
        let eof = lexer.next();
        assert_eq!(eof.token_type(), TokenType::Eof);
        assert_eq!(eof.position(), 2);
        assert!(eof.value().is_empty());
    }
}

#[test]
fn empty_pattern_yields_eof_immediately() {
    let mut lexer = Lexer::new("");
    let eof = lexer.next();
    assert_eq!(eof.token_type(), TokenType::Eof);
    assert_eq!(eof.position(), 0);
}

#[test]
fn back_replays_the_same_token() {
    // Rewinding must reproduce exactly the token that scanning would
    // have produced had the cursor never advanced past that point
    let mut lexer = Lexer::new(r"a\.b|c");
    let mut seen: Vec<Token<'_>> = Vec::new();
    loop {
        let token = lexer.next();
        if token.token_type() == TokenType::Eof {
            break;
        }
        seen.push(token);

        // Rewind over the token just produced and replay it
        lexer.back(token.value().len());
        let replayed = lexer.next();
        assert_eq!(replayed, token);
    }
    assert_eq!(seen.len(), 5);
}

#[test]
fn reset_rescans_from_the_start() {
    let mut lexer = Lexer::new("x+");
    let first_pass = [lexer.next(), lexer.next(), lexer.next()];
    lexer.reset();
    let second_pass = [lexer.next(), lexer.next(), lexer.next()];
    assert_eq!(first_pass, second_pass);
}

#[test]
fn adversarial_bytes_do_not_crash_the_lexer() {
    let patterns: [&[u8]; 4] = [
        b"\\\\\\",
        b"\x00\x01\xFF",
        b"((((((((((",
        b"\\\x00",
    ];
    for pattern in patterns {
        let mut lexer = Lexer::from_bytes(pattern);
        let mut guard = 0;
        while lexer.next().token_type() != TokenType::Eof {
            guard += 1;
            assert!(guard <= pattern.len(), "lexer failed to make progress");
        }
    }
}
