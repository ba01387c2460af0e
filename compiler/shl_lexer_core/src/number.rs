//! Numeric literal classification.
//!
//! Recognises decimal, hex and `base#digits` literals (bases 2 through 64).
//! A leading `0` followed by another digit is read as hex rather than octal,
//! so common zero-padded numbers never light up as errors.
//!
//! Digit values follow the shell convention: `0-9` are 0-9, `a-z` are 10-35,
//! `A-Z` are 36-61, `@` is 62 and `_` is 63. Bases up to 36 fold upper case
//! onto lower case.

use crate::char_class::{is_digit, is_hex_digit};
use crate::style::Style;

/// Largest base accepted by `base#digits`.
pub const BASE_MAX: u8 = 64;

/// Smallest base accepted by `base#digits`.
pub const BASE_MIN: u8 = 2;

/// Active base of the numeral being scanned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberBase {
    #[default]
    Decimal,
    Hex,
    /// Explicit `base#` prefix, always within `BASE_MIN..=BASE_MAX`.
    Radix(u8),
    /// Invalid base or invalid digit. Never recovers.
    Error,
}

/// Whether the classifier consumed the current byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberStep {
    /// The byte belongs to the numeral.
    Continue,
    /// The numeral ended before this byte.
    End,
}

/// Value of a shell digit, or `None` for bytes that are not digits in any base.
#[inline]
pub const fn digit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'z' => Some(b - b'a' + 10),
        b'A'..=b'Z' => Some(b - b'A' + 36),
        b'@' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}

/// Parse the digits before `#` as a base. Anything with more than two
/// digits, or outside `BASE_MIN..=BASE_MAX`, is an error.
fn parse_base(digits: u8, value: u32) -> NumberBase {
    if digits == 0 || digits > 2 {
        return NumberBase::Error;
    }
    match u8::try_from(value) {
        Ok(base) if (BASE_MIN..=BASE_MAX).contains(&base) => NumberBase::Radix(base),
        _ => NumberBase::Error,
    }
}

/// Incremental classifier for one numeric literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberLiteral {
    base: NumberBase,
    /// Decimal digits seen while still in `Decimal` (candidate base prefix).
    prefix_digits: u8,
    prefix_value: u32,
    /// Numeric value so far; `None` once invalid or overflowed.
    value: Option<u64>,
}

impl NumberLiteral {
    /// Start a literal at the leading digit `first`.
    ///
    /// Returns the classifier and whether the caller must also consume `next`
    /// (the `x` of a `0x` prefix).
    pub fn start(first: u8, next: u8) -> (Self, bool) {
        let d = u32::from(first.wrapping_sub(b'0'));
        let mut lit = NumberLiteral {
            base: NumberBase::Decimal,
            prefix_digits: 1,
            prefix_value: d,
            value: Some(u64::from(d)),
        };
        if first == b'0' {
            if next == b'x' || next == b'X' {
                lit.base = NumberBase::Hex;
                lit.value = Some(0);
                return (lit, true);
            }
            if is_digit(next) {
                lit.base = NumberBase::Hex;
            }
        }
        (lit, false)
    }

    /// Offer the next byte to the literal.
    pub fn step(&mut self, ch: u8) -> NumberStep {
        match self.base {
            NumberBase::Decimal => {
                if ch == b'#' {
                    self.base = parse_base(self.prefix_digits, self.prefix_value);
                    if self.base == NumberBase::Error {
                        self.value = None;
                        return NumberStep::End;
                    }
                    self.value = Some(0);
                    return NumberStep::Continue;
                }
                if is_digit(ch) {
                    let d = ch - b'0';
                    self.prefix_digits = self.prefix_digits.saturating_add(1);
                    self.prefix_value = self
                        .prefix_value
                        .saturating_mul(10)
                        .saturating_add(u32::from(d));
                    self.accumulate(10, d);
                    return NumberStep::Continue;
                }
                NumberStep::End
            }
            NumberBase::Hex => match digit_value(ch) {
                Some(d) if is_hex_digit(ch) => {
                    let d = if d >= 36 { d - 26 } else { d };
                    self.accumulate(16, d);
                    NumberStep::Continue
                }
                _ => NumberStep::End,
            },
            NumberBase::Radix(base) => match digit_value(ch) {
                Some(d) => {
                    let d = if base <= 36 && d >= 36 { d - 26 } else { d };
                    if d < base {
                        self.accumulate(u64::from(base), d);
                    } else {
                        self.base = NumberBase::Error;
                        self.value = None;
                    }
                    NumberStep::Continue
                }
                None => NumberStep::End,
            },
            NumberBase::Error => {
                if is_digit(ch) {
                    NumberStep::Continue
                } else {
                    NumberStep::End
                }
            }
        }
    }

    fn accumulate(&mut self, radix: u64, digit: u8) {
        self.value = self
            .value
            .and_then(|v| v.checked_mul(radix))
            .and_then(|v| v.checked_add(u64::from(digit)));
    }

    pub fn base(&self) -> NumberBase {
        self.base
    }

    pub fn is_error(&self) -> bool {
        self.base == NumberBase::Error
    }

    /// Value of the literal so far, when valid and representable.
    pub fn value(&self) -> Option<u64> {
        if self.is_error() {
            None
        } else {
            self.value
        }
    }

    /// Style for the finished literal.
    pub fn style(&self) -> Style {
        if self.is_error() {
            Style::Error
        } else {
            Style::Number
        }
    }
}

/// Classify a complete numeral from its text. Returns the literal state after
/// the last byte it accepted, plus the number of bytes accepted.
pub fn classify_numeral(text: &[u8]) -> (NumberLiteral, usize) {
    let Some(&first) = text.first() else {
        return (NumberLiteral::default(), 0);
    };
    let next = text.get(1).copied().unwrap_or(0);
    let (mut lit, skip) = NumberLiteral::start(first, next);
    let mut i = if skip { 2 } else { 1 };
    while i < text.len() {
        if lit.step(text[i]) == NumberStep::End {
            break;
        }
        i += 1;
    }
    (lit, i)
}
