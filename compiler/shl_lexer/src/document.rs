//! The host side of a lexing pass.
//!
//! The lexer owns no text. Everything it reads (bytes, line table, previous
//! line states, properties) and everything it writes (style bytes, line
//! states, fold levels) goes through [`Document`]. Editors implement it over
//! their own buffers; [`TextDocument`](crate::TextDocument) is the in-memory
//! implementation used by the CLI and the tests.

use std::ops::Range;

use shl_lexer_core::Style;

use crate::fold::FoldLevel;

/// Random-access view of a styled document.
///
/// Offsets are byte offsets. Lines are separated by `\n`; a `\r` before it
/// belongs to the line.
pub trait Document {
    /// Length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at `pos`, or `0` past either end.
    fn byte_at(&self, pos: usize) -> u8;

    /// Number of lines. Always at least one.
    fn line_count(&self) -> usize;

    /// Offset of the first byte of `line`. Lines past the end map to `len()`.
    fn line_start(&self, line: usize) -> usize;

    /// Line containing `pos`. Offsets past the end map to the last line.
    fn line_of_offset(&self, pos: usize) -> usize;

    /// Opaque per-line lexer state, `0` if never written.
    fn line_state(&self, line: usize) -> u8;

    /// Store per-line lexer state, returning the previous value.
    fn set_line_state(&mut self, line: usize, state: u8) -> u8;

    fn style_at(&self, pos: usize) -> Style;

    /// Style every byte in `range`. Out-of-range bytes are ignored.
    fn set_style_range(&mut self, range: Range<usize>, style: Style);

    fn fold_level(&self, line: usize) -> FoldLevel;

    fn set_fold_level(&mut self, line: usize, level: FoldLevel);

    /// Integer property, or `default` when unset or not a number.
    fn property_int(&self, name: &str, default: i64) -> i64;
}
