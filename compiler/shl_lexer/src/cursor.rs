//! Forward-only styling cursor.
//!
//! The cursor walks the document one byte at a time, remembering the byte
//! before and after the current one and where the current line ends. Styling
//! works on segments: [`StyleCursor::set_state`] closes the segment that
//! started at the previous state change and writes its style to the
//! document, then opens a new one at the current position.
//!
//! The walk visits one position past the last byte (reading as `0`) so that
//! tokens touching the end of the document are closed like any other.

use std::ops::Range;

use shl_lexer_core::{BoundedBuf, ByteWindow, Style};

use crate::document::Document;

pub struct StyleCursor<'d, D: Document + ?Sized> {
    doc: &'d mut D,
    pos: usize,
    /// One past the last visitable position.
    limit: usize,
    seg_start: usize,
    state: Style,
    ch_prev: u8,
    ch: u8,
    ch_next: u8,
    line: usize,
    line_end: usize,
    at_line_start: bool,
    at_line_end: bool,
}

impl<'d, D: Document + ?Sized> StyleCursor<'d, D> {
    /// Start at `start` in `state`. `start` should be a line start.
    pub fn new(doc: &'d mut D, start: usize, state: Style) -> Self {
        let len = doc.len();
        let pos = start.min(len);
        let line = doc.line_of_offset(pos);
        let mut cursor = StyleCursor {
            ch_prev: pos.checked_sub(1).map_or(0, |p| doc.byte_at(p)),
            ch: doc.byte_at(pos),
            ch_next: doc.byte_at(pos + 1),
            at_line_start: pos == doc.line_start(line),
            limit: len + 1,
            doc,
            pos,
            seg_start: pos,
            state,
            line,
            line_end: 0,
            at_line_end: false,
        };
        cursor.line_end = cursor.end_of_line(line);
        cursor.at_line_end = cursor.pos >= cursor.line_end;
        cursor
    }

    /// Offset of the last position of `line`: its `\n`, or the document end
    /// for the final line.
    fn end_of_line(&self, line: usize) -> usize {
        if line + 1 < self.doc.line_count() {
            self.doc.line_start(line + 1) - 1
        } else {
            self.doc.len()
        }
    }

    #[inline]
    pub fn more(&self) -> bool {
        self.pos < self.limit
    }

    pub fn forward(&mut self) {
        if self.pos >= self.limit {
            return;
        }
        self.at_line_start = self.at_line_end;
        if self.at_line_start {
            self.line += 1;
            self.line_end = self.end_of_line(self.line);
        }
        self.pos += 1;
        self.ch_prev = self.ch;
        self.ch = self.ch_next;
        self.ch_next = self.doc.byte_at(self.pos + 1);
        self.at_line_end = self.pos >= self.line_end;
    }

    pub fn forward_n(&mut self, n: usize) {
        for _ in 0..n {
            self.forward();
        }
    }

    /// Close the current segment with the current state and open one in `state`.
    pub fn set_state(&mut self, state: Style) {
        self.commit(self.seg_start..self.pos);
        self.seg_start = self.pos;
        self.state = state;
    }

    /// Restyle the segment in progress without closing it.
    #[inline]
    pub fn change_state(&mut self, state: Style) {
        self.state = state;
    }

    pub fn forward_set_state(&mut self, state: Style) {
        self.forward();
        self.set_state(state);
    }

    /// Close the final segment.
    pub fn complete(&mut self) {
        self.commit(self.seg_start..self.pos);
        self.seg_start = self.pos;
    }

    fn commit(&mut self, range: Range<usize>) {
        let end = range.end.min(self.doc.len());
        if range.start < end {
            self.doc.set_style_range(range.start..end, self.state);
        }
    }

    /// Bytes in the current segment.
    #[inline]
    pub fn length_current(&self) -> usize {
        self.pos - self.seg_start
    }

    /// Copy the current segment, keeping at most `N` bytes.
    pub fn copy_current<const N: usize>(&self) -> BoundedBuf<N> {
        let mut buf = BoundedBuf::new();
        for p in self.seg_start..self.pos.min(self.doc.len()) {
            if !buf.push_truncating(self.doc.byte_at(p)) {
                break;
            }
        }
        buf
    }

    #[inline]
    pub fn state(&self) -> Style {
        self.state
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.at_line_end
    }

    pub fn doc(&self) -> &D {
        &*self.doc
    }

    pub fn doc_mut(&mut self) -> &mut D {
        &mut *self.doc
    }
}

impl<D: Document + ?Sized> ByteWindow for StyleCursor<'_, D> {
    #[inline]
    fn relative(&self, offset: isize) -> u8 {
        match offset {
            -1 => self.ch_prev,
            0 => self.ch,
            1 => self.ch_next,
            _ => self
                .pos
                .checked_add_signed(offset)
                .map_or(0, |p| self.doc.byte_at(p)),
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.forward();
    }
}

#[cfg(test)]
mod tests;
