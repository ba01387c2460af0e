//! In-memory [`Document`] host.
//!
//! Owns the text together with everything a lexing pass persists: one style
//! byte per text byte, one state byte and one fold level per line. Edits keep
//! the per-line tables aligned with the text. Lines an edit creates start
//! with state `0`, which the restart search never stops at.

use std::ops::Range;

use memchr::memchr_iter;
use shl_lexer_core::Style;
use thiserror::Error;

use crate::document::Document;
use crate::fold::FoldLevel;
use crate::incremental::TextChange;
use crate::properties::PropertySet;

/// An edit that cannot be applied to the document.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("edit range {start}..{end} is outside the document (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("edit range {start}..{end} is reversed")]
    Reversed { start: usize, end: usize },
    #[error("offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: usize },
}

/// Text plus lexer output.
#[derive(Clone, Debug, Default)]
pub struct TextDocument {
    text: String,
    styles: Vec<u8>,
    /// Offset of the first byte of every line. `line_starts[0] == 0`.
    line_starts: Vec<usize>,
    line_states: Vec<u8>,
    fold_levels: Vec<FoldLevel>,
    properties: PropertySet,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = line_starts_of(text.as_bytes(), 0);
        let lines = line_starts.len();
        TextDocument {
            styles: vec![Style::Default.as_u8(); text.len()],
            line_states: vec![0; lines],
            fold_levels: vec![FoldLevel::default(); lines],
            line_starts,
            text,
            properties: PropertySet::new(),
        }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: PropertySet) -> Self {
        self.properties = properties;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw style bytes, one per text byte.
    pub fn styles(&self) -> &[u8] {
        &self.styles
    }

    pub fn line_states(&self) -> &[u8] {
        &self.line_states
    }

    pub fn fold_levels(&self) -> &[FoldLevel] {
        &self.fold_levels
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertySet {
        &mut self.properties
    }

    /// Text of `line` without its terminator.
    pub fn line_text(&self, line: usize) -> &str {
        let start = self.line_start(line);
        let end = self.line_start(line + 1);
        self.text[start..end].trim_end_matches('\n')
    }

    /// Maximal runs of equally styled bytes.
    pub fn style_runs(&self) -> Vec<(Range<usize>, Style)> {
        let mut runs: Vec<(Range<usize>, Style)> = Vec::new();
        for (pos, &byte) in self.styles.iter().enumerate() {
            let style = Style::from_u8(byte);
            match runs.last_mut() {
                Some((range, last)) if *last == style => range.end = pos + 1,
                _ => runs.push((pos..pos + 1, style)),
            }
        }
        runs
    }

    pub fn insert(&mut self, at: usize, text: &str) -> Result<TextChange, EditError> {
        self.replace(at..at, text)
    }

    pub fn delete(&mut self, range: Range<usize>) -> Result<TextChange, EditError> {
        self.replace(range, "")
    }

    /// Replace `range` with `text`, shifting styles and line tables.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<TextChange, EditError> {
        let Range { start, end } = range;
        if start > end {
            return Err(EditError::Reversed { start, end });
        }
        if end > self.text.len() {
            return Err(EditError::OutOfBounds {
                start,
                end,
                len: self.text.len(),
            });
        }
        for offset in [start, end] {
            if !self.text.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }

        self.text.replace_range(start..end, text);
        self.styles.splice(
            start..end,
            std::iter::repeat_n(Style::Default.as_u8(), text.len()),
        );

        // lines whose first byte was inside the removed range are gone
        let lo = self.line_starts.partition_point(|&s| s <= start);
        let hi = self.line_starts.partition_point(|&s| s <= end);
        let inserted = line_starts_of(text.as_bytes(), start);
        let added = inserted.len() - 1;
        self.line_starts.splice(lo..hi, inserted.into_iter().skip(1));
        for s in &mut self.line_starts[lo + added..] {
            *s = *s - end + start + text.len();
        }
        self.line_states.splice(lo..hi, std::iter::repeat_n(0, added));
        self.fold_levels
            .splice(lo..hi, std::iter::repeat_n(FoldLevel::default(), added));

        let change = TextChange::replace(start, end - start, text.len());
        tracing::trace!(?change, lines = self.line_starts.len(), "edit applied");
        Ok(change)
    }
}

/// Line starts of `bytes`, offset by `base`. The first entry is `base`.
fn line_starts_of(bytes: &[u8], base: usize) -> Vec<usize> {
    std::iter::once(base)
        .chain(memchr_iter(b'\n', bytes).map(|i| base + i + 1))
        .collect()
}

impl Document for TextDocument {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn byte_at(&self, pos: usize) -> u8 {
        self.text.as_bytes().get(pos).copied().unwrap_or(0)
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.text.len())
    }

    fn line_of_offset(&self, pos: usize) -> usize {
        self.line_starts
            .partition_point(|&s| s <= pos)
            .saturating_sub(1)
    }

    fn line_state(&self, line: usize) -> u8 {
        self.line_states.get(line).copied().unwrap_or(0)
    }

    fn set_line_state(&mut self, line: usize, state: u8) -> u8 {
        match self.line_states.get_mut(line) {
            Some(slot) => std::mem::replace(slot, state),
            None => 0,
        }
    }

    fn style_at(&self, pos: usize) -> Style {
        self.styles
            .get(pos)
            .map_or(Style::Default, |&b| Style::from_u8(b))
    }

    fn set_style_range(&mut self, range: Range<usize>, style: Style) {
        let end = range.end.min(self.styles.len());
        let start = range.start.min(end);
        self.styles[start..end].fill(style.as_u8());
    }

    fn fold_level(&self, line: usize) -> FoldLevel {
        self.fold_levels.get(line).copied().unwrap_or_default()
    }

    fn set_fold_level(&mut self, line: usize, level: FoldLevel) {
        if let Some(slot) = self.fold_levels.get_mut(line) {
            *slot = level;
        }
    }

    fn property_int(&self, name: &str, default: i64) -> i64 {
        self.properties.int_or(name, default)
    }
}

#[cfg(test)]
mod tests;
