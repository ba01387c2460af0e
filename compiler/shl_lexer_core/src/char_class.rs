//! Byte classification tables.
//!
//! One 256-entry table, computed at compile time, maps every byte to the set
//! of shell character classes it belongs to. Bytes `>= 0x80` belong to no
//! class: UTF-8 text inside words is carried along by the surrounding style
//! but never starts a token.

use bitflags::bitflags;

bitflags! {
    /// Character classes consulted by the lexer.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u16 {
        /// First byte of a word: ASCII letters and `_`.
        const WORD_START = 1 << 0;
        /// Word body. `+`, `-` and `.` are common in shell file names and options.
        const WORD = 1 << 1;
        /// Shell metacharacters that end an unquoted word, plus NUL.
        const META = 1 << 2;
        /// Bytes that start an operator token.
        const OPERATOR = 1 << 3;
        /// Letters usable in a one-letter file-test operator (`-f`, `-d`, ...).
        const FILE_TEST = 1 << 4;
        /// Parameter name body after `$`.
        const PARAM = 1 << 5;
        /// First byte of an unquoted here-document delimiter.
        const HEREDOC_START = 1 << 6;
        /// Unquoted here-document delimiter body.
        const HEREDOC = 1 << 7;
        /// Bytes after `<<` meaning left shift instead of a here-document.
        const LEFT_SHIFT = 1 << 8;
        /// Space, tab, and the other ASCII whitespace controls (0x09..=0x0D).
        const SPACE = 1 << 9;
        /// ASCII decimal digit.
        const DIGIT = 1 << 10;
        /// ASCII hexadecimal digit.
        const HEX_DIGIT = 1 << 11;
    }
}

const fn in_set(b: u8, set: &[u8]) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == b {
            return true;
        }
        i += 1;
    }
    false
}

const fn compute(b: u8) -> u16 {
    let alpha = b.is_ascii_alphabetic();
    let digit = b.is_ascii_digit();
    let mut bits = 0u16;

    if alpha || b == b'_' {
        bits |= CharClass::WORD_START.bits();
    }
    if alpha || digit || in_set(b, b"._+-") {
        bits |= CharClass::WORD.bits();
    }
    if b == 0 || in_set(b, b"|&;()<> \t\r\n") {
        bits |= CharClass::META.bits();
    }
    if in_set(b, b"^&%()-+=|{}[]:;>,*<?!.~@") {
        bits |= CharClass::OPERATOR.bits();
    }
    if in_set(b, b"rwxoRWXOezsfdlpSbctugkTBMACahGLNn") {
        bits |= CharClass::FILE_TEST.bits();
    }
    if alpha || digit || b == b'$' || b == b'_' {
        bits |= CharClass::PARAM.bits();
    }
    if alpha || in_set(b, b"_\\-+!%*,./:?@[]^`{}~") {
        bits |= CharClass::HEREDOC_START.bits();
    }
    if alpha || digit || in_set(b, b"_-+!%*,./:=?@[]^`{}~") {
        bits |= CharClass::HEREDOC.bits();
    }
    if digit || b == b'$' {
        bits |= CharClass::LEFT_SHIFT.bits();
    }
    if b == b' ' || (b >= 0x09 && b <= 0x0d) {
        bits |= CharClass::SPACE.bits();
    }
    if digit {
        bits |= CharClass::DIGIT.bits();
    }
    if b.is_ascii_hexdigit() {
        bits |= CharClass::HEX_DIGIT.bits();
    }
    bits
}

/// Pre-computed class bits for every byte value.
static CLASS_TABLE: [u16; 256] = {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "i < 256 always fits in u8"
        )]
        let b = i as u8;
        table[i] = compute(b);
        i += 1;
    }
    table
};

/// Classes of a byte.
#[inline]
pub fn classify(b: u8) -> CharClass {
    CharClass::from_bits_retain(CLASS_TABLE[b as usize])
}

#[inline]
pub fn is_word_start(b: u8) -> bool {
    classify(b).contains(CharClass::WORD_START)
}

#[inline]
pub fn is_word(b: u8) -> bool {
    classify(b).contains(CharClass::WORD)
}

#[inline]
pub fn is_meta(b: u8) -> bool {
    classify(b).contains(CharClass::META)
}

#[inline]
pub fn is_operator(b: u8) -> bool {
    classify(b).contains(CharClass::OPERATOR)
}

#[inline]
pub fn is_file_test(b: u8) -> bool {
    classify(b).contains(CharClass::FILE_TEST)
}

#[inline]
pub fn is_param(b: u8) -> bool {
    classify(b).contains(CharClass::PARAM)
}

#[inline]
pub fn is_heredoc_start(b: u8) -> bool {
    classify(b).contains(CharClass::HEREDOC_START)
}

#[inline]
pub fn is_heredoc(b: u8) -> bool {
    classify(b).contains(CharClass::HEREDOC)
}

#[inline]
pub fn is_left_shift(b: u8) -> bool {
    classify(b).contains(CharClass::LEFT_SHIFT)
}

/// Whitespace as the lexer understands it: space and 0x09..=0x0D.
#[inline]
pub fn is_space(b: u8) -> bool {
    classify(b).contains(CharClass::SPACE)
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    classify(b).contains(CharClass::DIGIT)
}

#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    classify(b).contains(CharClass::HEX_DIGIT)
}

#[cfg(test)]
mod tests;
