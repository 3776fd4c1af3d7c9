//! Character-classification primitives
//!
//! Small, branch-light predicates and per-codepoint conversion helpers
//! shared by the literal value decoders and the regex lexer. Everything
//! here is pure and operates on a single character or code unit.

/// Returns true for ASCII octal digits (`0`-`7`)
#[inline(always)]
pub fn is_octal_digit(ch: char) -> bool {
    ch.is_ascii_digit() && ch <= '7'
}

/// Returns true for the low half of the octal digits (`0`-`3`)
///
/// Used by the legacy octal escape grammar, which groups digits into
/// `ZeroToThree` and `FourToSeven` to bound escape values to one byte.
#[inline(always)]
pub fn is_zero_to_three(ch: char) -> bool {
    ('0'..='3').contains(&ch)
}

/// Returns true for the high half of the octal digits (`4`-`7`)
#[inline(always)]
pub fn is_four_to_seven(ch: char) -> bool {
    ('4'..='7').contains(&ch)
}

/// Converts an ASCII hex digit to its numeric value
///
/// # Panics
///
/// Panics if `ch` is not an ASCII hex digit. Callers are expected to
/// have checked with [`char::is_ascii_hexdigit`] first; passing anything
/// else is a bug in the caller, not a recoverable condition.
#[inline(always)]
pub fn hex_digit_value(ch: char) -> u32 {
    match ch.to_digit(16) {
        Some(value) => value,
        None => panic!("hex_digit_value called with non-hex character {ch:?}"),
    }
}

/// Returns true if the UTF-16 code unit is a high (leading) surrogate
#[inline(always)]
pub fn is_high_surrogate(code_unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&code_unit)
}

/// Returns true if the UTF-16 code unit is a low (trailing) surrogate
#[inline(always)]
pub fn is_low_surrogate(code_unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&code_unit)
}

/// Combines a UTF-16 surrogate pair into a supplementary code point
///
/// The caller must have verified the pair with [`is_high_surrogate`]
/// and [`is_low_surrogate`]; the result is then always in the
/// supplementary range U+10000..=U+10FFFF.
#[inline(always)]
pub fn combine_surrogates(high: u16, low: u16) -> u32 {
    0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
}

/// Returns true for the ECMAScript line terminators
///
/// These are `\n`, `\r`, U+2028 LINE SEPARATOR and U+2029 PARAGRAPH
/// SEPARATOR (https://tc39.es/ecma262/#sec-line-terminators).
#[inline(always)]
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
