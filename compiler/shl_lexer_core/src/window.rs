//! The seam between the state machines and whatever walks the document.
//!
//! Sub-machines that need more than the current byte (operator
//! disambiguation, glob lookahead) take a `ByteWindow` instead of a document,
//! so they can be driven by the styling cursor in production and by a plain
//! byte slice in tests.

/// Forward-only view of the bytes around the current position.
///
/// All reads outside the document return `0`.
pub trait ByteWindow {
    /// Byte at `current + offset`. Negative offsets look behind.
    fn relative(&self, offset: isize) -> u8;

    /// Move the current position forward by one byte.
    fn advance(&mut self);

    #[inline]
    fn prev(&self) -> u8 {
        self.relative(-1)
    }

    #[inline]
    fn ch(&self) -> u8 {
        self.relative(0)
    }

    #[inline]
    fn next(&self) -> u8 {
        self.relative(1)
    }

    /// `true` if the bytes starting at the current position equal `pattern`.
    fn matches(&self, pattern: &[u8]) -> bool {
        pattern
            .iter()
            .zip(0isize..)
            .all(|(&b, offset)| self.relative(offset) == b)
    }
}

/// A [`ByteWindow`] over an in-memory slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceWindow<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceWindow<'a> {
    pub fn new(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl ByteWindow for SliceWindow<'_> {
    fn relative(&self, offset: isize) -> u8 {
        self.pos
            .checked_add_signed(offset)
            .and_then(|i| self.bytes.get(i))
            .copied()
            .unwrap_or(0)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

#[cfg(test)]
mod tests;
