//! Literal value decoders
//!
//! The upstream scanner only slices literal tokens out of the source
//! text; nothing is interpreted until the parser actually needs a
//! literal's semantic value. The decoders in this module perform that
//! on-demand conversion: numeric literal text to `f64`, string/template
//! literal contents to decoded text, boolean keyword text to `bool`.
//!
//! All decoders are pure functions of the token text. They hold no
//! shared state and are safe to call concurrently on different tokens.
//!
//! Numeric decoding has no error path: the scanner has already verified
//! the literal against the grammar, so malformed input here is a caller
//! bug and panics. String decoding is different, because escape-sequence
//! validity is checked *here*, not in the scanner: malformed escapes
//! surface as [`StringValueError`] so the parser can reject the program.

use crate::chars::{
    combine_surrogates, hex_digit_value, is_four_to_seven, is_high_surrogate, is_line_terminator,
    is_low_surrogate, is_octal_digit, is_zero_to_three,
};
use crate::error::StringValueError;
use smallvec::SmallVec;

/// Outcome classification of a successful string literal decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringValueStatus {
    /// The literal decoded cleanly
    Ok,
    /// The literal contains at least one legacy octal escape sequence
    ///
    /// The decoded value is still usable, but the literal is a syntax
    /// error in strict-mode code; the parser decides based on context.
    LegacyOctalEscapeSequence,
}

/// A decoded string literal value together with its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue {
    /// The decoded text
    pub value: String,
    /// Advisory status; see [`StringValueStatus`]
    pub status: StringValueStatus,
}

/// Character-wise scanner over literal contents with bounded lookahead
///
/// A minimal cursor: `peek(n)` looks ahead without consuming, `consume`
/// advances by one character. Lookahead cost is O(n) per call, which is
/// fine here because every decode rule needs at most three characters.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    #[inline(always)]
    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current byte offset into the contents
    #[inline(always)]
    fn offset(&self) -> usize {
        self.pos
    }

    /// Peeks at the character `offset` characters ahead without consuming
    #[inline(always)]
    fn peek(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    #[inline(always)]
    fn next_is(&self, ch: char) -> bool {
        self.peek(0) == Some(ch)
    }

    /// Advances by one character and returns it
    #[inline(always)]
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `literal` if and only if the input continues with it
    fn try_skip(&mut self, literal: &str) -> bool {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }
}

/// Decodes the value of a grammar-valid numeric literal
///
/// Digit separators (`_`) are stripped first. A leading `0` dispatches
/// on the next character: `x`/`X` is hexadecimal, `o`/`O` octal, `b`/`B`
/// binary, and a bare digit is a legacy octal literal *unless* an `8` or
/// `9` appears anywhere in the text (then the literal is decimal, e.g.
/// `089`). Everything else is a decimal, possibly fractional or
/// exponential, value.
///
/// # Panics
///
/// Panics if `text` is not a well-formed numeric literal. The upstream
/// scanner guarantees grammar validity; this function only converts.
pub fn numeric_literal_value(text: &str) -> f64 {
    // Digit separators are purely cosmetic. Typical literals are short,
    // so the cleaned copy lives on the stack.
    let cleaned: SmallVec<[u8; 32]> = text.bytes().filter(|&b| b != b'_').collect();
    let cleaned =
        std::str::from_utf8(&cleaned).expect("stripping ASCII separators preserves UTF-8");

    let bytes = cleaned.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return parse_radix_digits(&cleaned[2..], 16),
            b'o' | b'O' => return parse_radix_digits(&cleaned[2..], 8),
            b'b' | b'B' => return parse_radix_digits(&cleaned[2..], 2),
            b'0'..=b'9' => {
                // Legacy octal (syntax error in strict mode), but only if
                // no digit 8 or 9 appears anywhere; "089" is decimal.
                if !text.contains(['8', '9']) {
                    return parse_radix_digits(&cleaned[1..], 8);
                }
            }
            _ => {}
        }
    }

    cleaned
        .parse::<f64>()
        .expect("numeric literal text was validated by the scanner")
}

/// Accumulates digits of the given radix directly into an `f64`
///
/// Avoids an intermediate integer so that arbitrarily long grammar-valid
/// literals (e.g. a hex literal wider than 64 bits) still decode.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    digits.chars().fold(0.0, |value, ch| {
        let digit = ch
            .to_digit(radix)
            .expect("radix literal text was validated by the scanner");
        value * f64::from(radix) + f64::from(digit)
    })
}

/// Decodes the value of a boolean literal
pub fn bool_literal_value(text: &str) -> bool {
    text == "true"
}

/// Decodes string or template literal contents into their runtime value
///
/// `contents` is the literal text with the surrounding quotes already
/// stripped (template literal strings never had any). The decode is a
/// single pass with at most three characters of lookahead:
///
/// - plain characters are copied verbatim;
/// - `\` + line terminator is a line continuation and emits nothing;
/// - `\0` (not followed by a digit) emits NUL;
/// - `\xHH` emits the byte value, failing with
///   [`StringValueError::MalformedHexEscape`] on a non-hex digit;
/// - `\u{...}` and `\uHHHH` emit code points, combining valid UTF-16
///   surrogate pairs and failing with
///   [`StringValueError::MalformedUnicodeEscape`] /
///   [`StringValueError::UnicodeEscapeOverflow`] on bad input;
/// - legacy octal escapes (Annex B) decode to their byte value and make
///   the returned status sticky at
///   [`StringValueStatus::LegacyOctalEscapeSequence`];
/// - anything else decodes as a single-character escape (`\b \f \n \r
///   \t \v`) or the escaped character itself.
///
/// Code points that cannot be represented in a Rust string (unpaired
/// surrogates, values above U+10FFFF that did not overflow the
/// accumulator) decode to U+FFFD REPLACEMENT CHARACTER.
///
/// An `Err` means the literal violates the grammar; the partial decode
/// is discarded and scanning stops at the failure point.
///
/// # Panics
///
/// Panics if `contents` ends with a lone backslash. The upstream scanner
/// never produces such a literal (a trailing `\` would have escaped the
/// closing quote), so this indicates a scanner bug.
pub fn string_literal_value(contents: &str) -> Result<StringValue, StringValueError> {
    let mut scanner = Scanner::new(contents);
    let mut status = StringValueStatus::Ok;
    let mut value = String::with_capacity(contents.len());

    while !scanner.is_eof() {
        let escape_offset = scanner.offset();

        // No escape, copy one character and continue
        let ch = scanner.consume().expect("scanner is not at end of input");
        if ch != '\\' {
            value.push(ch);
            continue;
        }

        let Some(next) = scanner.peek(0) else {
            panic!("string literal contents end with a lone backslash");
        };

        // Line continuation: the backslash and the terminator both vanish
        if is_line_terminator(next) {
            scanner.consume();
            continue;
        }

        // Null-byte escape: `\0` not followed by another digit
        if next == '0' && !scanner.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            scanner.consume();
            value.push('\0');
            continue;
        }

        // Hex escape: `\x` + exactly two hex digits
        if next == 'x' {
            scanner.consume();
            let (Some(high), Some(low)) = (scanner.peek(0), scanner.peek(1)) else {
                return Err(StringValueError::MalformedHexEscape {
                    offset: escape_offset,
                });
            };
            if !high.is_ascii_hexdigit() || !low.is_ascii_hexdigit() {
                return Err(StringValueError::MalformedHexEscape {
                    offset: escape_offset,
                });
            }
            scanner.consume();
            scanner.consume();
            push_code_point(&mut value, hex_digit_value(high) * 16 + hex_digit_value(low));
            continue;
        }

        // Unicode escape: `\u{...}` or `\u` + exactly four hex digits
        if next == 'u' {
            scanner.consume();
            let code_point = if scanner.next_is('{') {
                scanner.consume();
                let mut code_point: u32 = 0;
                loop {
                    let Some(digit) = scanner.peek(0).filter(char::is_ascii_hexdigit) else {
                        return Err(StringValueError::MalformedUnicodeEscape {
                            offset: escape_offset,
                        });
                    };
                    scanner.consume();
                    // The shift discards high bits, so a wrapped value is
                    // numerically smaller than the running accumulator.
                    let next_code_point = (code_point << 4) | hex_digit_value(digit);
                    if next_code_point < code_point {
                        return Err(StringValueError::UnicodeEscapeOverflow {
                            offset: escape_offset,
                        });
                    }
                    code_point = next_code_point;
                    if scanner.next_is('}') {
                        break;
                    }
                }
                scanner.consume();
                code_point
            } else {
                let Some(high) = decode_surrogate(&mut scanner) else {
                    return Err(StringValueError::MalformedUnicodeEscape {
                        offset: escape_offset,
                    });
                };

                if is_high_surrogate(high) && scanner.try_skip("\\u") {
                    let Some(low) = decode_surrogate(&mut scanner) else {
                        return Err(StringValueError::MalformedUnicodeEscape {
                            offset: escape_offset,
                        });
                    };

                    if is_low_surrogate(low) {
                        combine_surrogates(high, low)
                    } else {
                        // Not a pair after all: emit the high surrogate on
                        // its own and treat the second escape's value as an
                        // independent code point.
                        push_code_point(&mut value, u32::from(high));
                        u32::from(low)
                    }
                } else {
                    u32::from(high)
                }
            };
            push_code_point(&mut value, code_point);
            continue;
        }

        // Legacy octal escape sequences, only valid in non-strict
        // grammars: https://tc39.es/ecma262/#sec-additional-syntax-string-literals
        let octal_len = match_legacy_octal_escape(&scanner);
        if octal_len > 0 {
            status = StringValueStatus::LegacyOctalEscapeSequence;
            let mut code_point: u32 = 0;
            for _ in 0..octal_len {
                let digit = scanner.consume().expect("octal digits were peeked");
                code_point = code_point * 8 + digit.to_digit(8).expect("digit is octal");
            }
            // Longest pattern is \377, so the value fits in a byte
            debug_assert!(code_point <= 255);
            push_code_point(&mut value, code_point);
            continue;
        }

        // Single-character escapes, or the escaped character verbatim
        let ch = scanner.consume().expect("escape character was peeked");
        value.push(match ch {
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{000B}',
            other => other,
        });
    }

    Ok(StringValue { value, status })
}

/// Reads exactly four hex digits as one UTF-16 code unit
///
/// Returns `None` without a defined consume position if any of the four
/// characters is missing or not a hex digit; the caller reports the
/// escape as malformed either way.
fn decode_surrogate(scanner: &mut Scanner<'_>) -> Option<u16> {
    let mut surrogate: u16 = 0;
    for _ in 0..4 {
        let digit = scanner.peek(0).filter(char::is_ascii_hexdigit)?;
        scanner.consume();
        surrogate = (surrogate << 4) | hex_digit_value(digit) as u16;
    }
    Some(surrogate)
}

/// Matches the longest applicable legacy octal escape at the scanner
///
/// Returns how many digits the escape spans (0 when none applies). The
/// patterns come from ECMA-262 Annex B:
///
/// - `OctalDigit` \[lookahead not in OctalDigit\]
/// - `ZeroToThree OctalDigit` \[lookahead not in OctalDigit\]
/// - `FourToSeven OctalDigit`
/// - `ZeroToThree OctalDigit OctalDigit`
fn match_legacy_octal_escape(scanner: &Scanner<'_>) -> usize {
    let octal = |c: Option<char>| c.is_some_and(is_octal_digit);
    let zero_to_three = |c: Option<char>| c.is_some_and(is_zero_to_three);
    let four_to_seven = |c: Option<char>| c.is_some_and(is_four_to_seven);

    let (p0, p1, p2) = (scanner.peek(0), scanner.peek(1), scanner.peek(2));

    if octal(p0) && !octal(p1) {
        1
    } else if zero_to_three(p0) && octal(p1) && !octal(p2) {
        2
    } else if four_to_seven(p0) && octal(p1) {
        2
    } else if zero_to_three(p0) && octal(p1) && octal(p2) {
        3
    } else {
        0
    }
}

/// Appends a code point, substituting U+FFFD for unrepresentable values
#[inline]
fn push_code_point(value: &mut String, code_point: u32) {
    value.push(char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_radix_prefixes() {
        assert_eq!(numeric_literal_value("0x1A"), 26.0);
        assert_eq!(numeric_literal_value("0XFF"), 255.0);
        assert_eq!(numeric_literal_value("0o17"), 15.0);
        assert_eq!(numeric_literal_value("0O7"), 7.0);
        assert_eq!(numeric_literal_value("0b101"), 5.0);
        assert_eq!(numeric_literal_value("0B11"), 3.0);
    }

    #[test]
    fn test_numeric_legacy_octal() {
        assert_eq!(numeric_literal_value("017"), 15.0);
        assert_eq!(numeric_literal_value("00"), 0.0);
        // A digit 8 or 9 anywhere demotes the literal to decimal
        assert_eq!(numeric_literal_value("089"), 89.0);
        assert_eq!(numeric_literal_value("08"), 8.0);
    }

    #[test]
    fn test_numeric_decimal_and_float() {
        assert_eq!(numeric_literal_value("0"), 0.0);
        assert_eq!(numeric_literal_value("42"), 42.0);
        assert_eq!(numeric_literal_value("3.14"), 3.14);
        assert_eq!(numeric_literal_value("0.5"), 0.5);
        assert_eq!(numeric_literal_value(".5"), 0.5);
        assert_eq!(numeric_literal_value("1e3"), 1000.0);
        assert_eq!(numeric_literal_value("2.5e-2"), 0.025);
    }

    #[test]
    fn test_numeric_digit_separators() {
        assert_eq!(numeric_literal_value("1_000"), 1000.0);
        assert_eq!(numeric_literal_value("0x1_0"), 16.0);
        assert_eq!(numeric_literal_value("1_0.5_0"), 10.5);
    }

    #[test]
    fn test_numeric_wide_hex_literal() {
        // Wider than 64 bits; must still decode, losing precision only
        let value = numeric_literal_value("0x10000000000000000");
        assert_eq!(value, 18446744073709551616.0);
    }

    #[test]
    fn test_bool_literal() {
        assert!(bool_literal_value("true"));
        assert!(!bool_literal_value("false"));
    }

    #[test]
    fn test_string_plain_text() {
        let decoded = string_literal_value("hello").unwrap();
        assert_eq!(decoded.value, "hello");
        assert_eq!(decoded.status, StringValueStatus::Ok);
    }

    #[test]
    fn test_string_single_char_escapes() {
        let decoded = string_literal_value(r"a\nb\tc\bd\fe\vf\rg").unwrap();
        assert_eq!(decoded.value, "a\nb\tc\u{8}d\u{c}e\u{b}f\rg");
        assert_eq!(decoded.status, StringValueStatus::Ok);
    }

    #[test]
    fn test_string_verbatim_escape() {
        let decoded = string_literal_value(r#"\q\"\'\\"#).unwrap();
        assert_eq!(decoded.value, "q\"'\\");
    }

    #[test]
    fn test_string_line_continuation() {
        let decoded = string_literal_value("ab\\\ncd").unwrap();
        assert_eq!(decoded.value, "abcd");
        let decoded = string_literal_value("ab\\\u{2028}cd").unwrap();
        assert_eq!(decoded.value, "abcd");
    }

    #[test]
    fn test_line_continuation_consumes_one_terminator() {
        // \r\n is two separate characters at this layer: the
        // continuation swallows only the \r and the \n survives verbatim
        let decoded = string_literal_value("a\\\r\nb").unwrap();
        assert_eq!(decoded.value, "a\nb");
        assert_eq!(decoded.status, StringValueStatus::Ok);
    }

    #[test]
    fn test_string_null_byte_escape() {
        let decoded = string_literal_value(r"a\0b").unwrap();
        assert_eq!(decoded.value, "a\0b");
    }

    #[test]
    fn test_string_hex_escape() {
        let decoded = string_literal_value(r"\x41").unwrap();
        assert_eq!(decoded.value, "A");
        // \xFF is U+00FF, not a raw byte
        let decoded = string_literal_value(r"\xff").unwrap();
        assert_eq!(decoded.value, "\u{ff}");
    }

    #[test]
    fn test_string_malformed_hex_escape() {
        assert_eq!(
            string_literal_value(r"\x4"),
            Err(StringValueError::MalformedHexEscape { offset: 0 })
        );
        assert_eq!(
            string_literal_value(r"ab\xZ1"),
            Err(StringValueError::MalformedHexEscape { offset: 2 })
        );
    }

    #[test]
    fn test_string_unicode_escape_four_digits() {
        let decoded = string_literal_value("\\u0041").unwrap();
        assert_eq!(decoded.value, "A");
        let decoded = string_literal_value("\\u00e9").unwrap();
        assert_eq!(decoded.value, "\u{e9}");
    }

    #[test]
    fn test_string_unicode_escape_braced() {
        let decoded = string_literal_value(r"\u{1F600}").unwrap();
        assert_eq!(decoded.value, "\u{1F600}");
        let decoded = string_literal_value(r"\u{41}").unwrap();
        assert_eq!(decoded.value, "A");
    }

    #[test]
    fn test_string_unicode_escape_braced_overflow() {
        // Enough digits to wrap the 32-bit accumulator
        assert_eq!(
            string_literal_value(r"\u{100000001}"),
            Err(StringValueError::UnicodeEscapeOverflow { offset: 0 })
        );
    }

    #[test]
    fn test_string_unicode_escape_braced_out_of_range() {
        // Does not wrap, but exceeds U+10FFFF: replacement character
        let decoded = string_literal_value(r"\u{110000}").unwrap();
        assert_eq!(decoded.value, "\u{FFFD}");
    }

    #[test]
    fn test_string_malformed_unicode_escape() {
        assert_eq!(
            string_literal_value(r"\u004"),
            Err(StringValueError::MalformedUnicodeEscape { offset: 0 })
        );
        assert_eq!(
            string_literal_value(r"\u{}"),
            Err(StringValueError::MalformedUnicodeEscape { offset: 0 })
        );
        assert_eq!(
            string_literal_value(r"\u{12"),
            Err(StringValueError::MalformedUnicodeEscape { offset: 0 })
        );
    }

    #[test]
    fn test_string_surrogate_pair() {
        let decoded = string_literal_value("\\uD83D\\uDE00").unwrap();
        assert_eq!(decoded.value, "\u{1F600}");
    }

    #[test]
    fn test_string_lone_high_surrogate() {
        // Unrepresentable in UTF-8; decodes to the replacement character
        let decoded = string_literal_value(r"\uD83D").unwrap();
        assert_eq!(decoded.value, "\u{FFFD}");
        assert_eq!(decoded.status, StringValueStatus::Ok);
    }

    #[test]
    fn test_string_high_surrogate_followed_by_non_low() {
        // The second escape is reprocessed as an independent code point
        let decoded = string_literal_value(r"\uD83DA").unwrap();
        assert_eq!(decoded.value, "\u{FFFD}A");
    }

    #[test]
    fn test_string_legacy_octal_escapes() {
        let decoded = string_literal_value(r"\1").unwrap();
        assert_eq!(decoded.value, "\u{1}");
        assert_eq!(decoded.status, StringValueStatus::LegacyOctalEscapeSequence);

        let decoded = string_literal_value(r"\11").unwrap();
        assert_eq!(decoded.value, "\u{9}");
        assert_eq!(decoded.status, StringValueStatus::LegacyOctalEscapeSequence);

        let decoded = string_literal_value(r"\377").unwrap();
        assert_eq!(decoded.value, "\u{FF}");
        assert_eq!(decoded.status, StringValueStatus::LegacyOctalEscapeSequence);

        // FourToSeven OctalDigit stops after two digits
        let decoded = string_literal_value(r"\477").unwrap();
        assert_eq!(decoded.value, "\u{27}7");
        assert_eq!(decoded.status, StringValueStatus::LegacyOctalEscapeSequence);
    }

    #[test]
    fn test_string_octal_status_is_sticky() {
        // A clean escape after the octal one must not reset the status
        let decoded = string_literal_value(r"\1\n").unwrap();
        assert_eq!(decoded.value, "\u{1}\n");
        assert_eq!(decoded.status, StringValueStatus::LegacyOctalEscapeSequence);
    }

    #[test]
    fn test_string_null_followed_by_digit_is_octal() {
        let decoded = string_literal_value(r"\01").unwrap();
        assert_eq!(decoded.value, "\u{1}");
        assert_eq!(decoded.status, StringValueStatus::LegacyOctalEscapeSequence);
    }

    #[test]
    fn test_string_eight_and_nine_are_verbatim() {
        // \8 and \9 are not octal escapes; Annex B decodes them as the
        // digit itself, with no status change
        let decoded = string_literal_value(r"\8\9").unwrap();
        assert_eq!(decoded.value, "89");
        assert_eq!(decoded.status, StringValueStatus::Ok);
    }

    #[test]
    fn test_string_decode_stops_at_failure() {
        // The sentinel \x41 after the malformed escape must never be
        // processed; a failure discards all partial output
        assert_eq!(
            string_literal_value(r"ok\u{ZZ}\x41"),
            Err(StringValueError::MalformedUnicodeEscape { offset: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "lone backslash")]
    fn test_string_trailing_backslash_panics() {
        let _ = string_literal_value("abc\\");
    }
}
