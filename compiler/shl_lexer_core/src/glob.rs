//! zsh glob qualifier lookahead.
//!
//! `(` outside arithmetic is usually a subshell or an array, but zsh also
//! writes glob qualifiers and flags as `(#i)foo` or `*(#q.)`. Before treating
//! `(` as an operator the lexer peeks ahead for a balanced group that carries
//! a `#` marker and, if it finds one, styles the whole group as a word.

use crate::char_class::is_space;
use crate::window::ByteWindow;

/// Upper bound on lookahead, in bytes past the `(`.
pub const GLOB_SCAN_MAX: usize = 1024;

/// Scan forward from the `(` under the window.
///
/// Returns the offset of the closing `)` when the group is a glob, or `0`.
/// The window is only read, never advanced.
pub fn glob_scan<W: ByteWindow + ?Sized>(window: &W) -> usize {
    let mut depth = 0u32;
    // 0: no marker, 1: `#` somewhere inside, 2: `#` right after `(`.
    let mut hash = 0u8;
    for k in 1..=GLOB_SCAN_MAX {
        let Ok(offset) = isize::try_from(k) else {
            return 0;
        };
        let c = window.relative(offset);
        match c {
            0 => return 0,
            c if is_space(c) => return 0,
            b'\'' | b'"' => {
                // quotes only appear inside `(#...)` flag groups
                if hash != 2 {
                    return 0;
                }
            }
            b'#' if hash == 0 => hash = if k == 1 { 2 } else { 1 },
            b'(' => depth += 1,
            b')' => {
                if depth == 0 {
                    return if hash == 0 { 0 } else { k };
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    0
}
