//! Edit descriptions for incremental re-lexing.
//!
//! `TextChange` has the shape of an LSP `TextDocumentContentChangeEvent`
//! expressed in byte offsets: the region `[start, old_end)` of the old text
//! is replaced by `new_len` bytes.

use std::ops::Range;

/// A single text edit.
///
/// ```
/// use shl_lexer::TextChange;
///
/// let insert = TextChange::insert(10, 5);
/// assert_eq!(insert.delta(), 5);
///
/// let delete = TextChange::delete(5, 3);
/// assert_eq!(delete.delta(), -3);
///
/// let replace = TextChange::replace(0, 3, 5);
/// assert_eq!(replace.delta(), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TextChange {
    /// Start byte offset in old text.
    pub start: usize,
    /// End byte offset in old text (exclusive).
    pub old_end: usize,
    /// Length of replacement text in bytes.
    pub new_len: usize,
}

impl TextChange {
    #[inline]
    pub const fn new(start: usize, old_end: usize, new_len: usize) -> Self {
        TextChange {
            start,
            old_end,
            new_len,
        }
    }

    /// Insertion of `len` bytes at `at`.
    #[inline]
    pub const fn insert(at: usize, len: usize) -> Self {
        TextChange {
            start: at,
            old_end: at,
            new_len: len,
        }
    }

    /// Deletion of `len` bytes starting at `start`.
    #[inline]
    pub const fn delete(start: usize, len: usize) -> Self {
        TextChange {
            start,
            old_end: start + len,
            new_len: 0,
        }
    }

    #[inline]
    pub const fn replace(start: usize, old_len: usize, new_len: usize) -> Self {
        TextChange {
            start,
            old_end: start + old_len,
            new_len,
        }
    }

    /// Net change in document length (positive = grew, negative = shrank).
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub fn delta(&self) -> isize {
        // in-memory document lengths always fit in isize
        self.new_len as isize - self.old_len() as isize
    }

    /// Length of the removed region in the old text.
    #[inline]
    pub const fn old_len(&self) -> usize {
        self.old_end - self.start
    }

    /// New end position after the change is applied.
    #[inline]
    pub const fn new_end(&self) -> usize {
        self.start + self.new_len
    }

    /// Region of the new text that the change wrote.
    #[inline]
    pub const fn new_range(&self) -> Range<usize> {
        self.start..self.new_end()
    }
}
