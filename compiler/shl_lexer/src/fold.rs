//! Fold levels.
//!
//! A second pass over already-styled text. Each line gets a nesting depth
//! plus two flags: `WHITE` for blank lines and `HEADER` for lines that open a
//! deeper level. Openers and closers are:
//!
//! - `if`/`case`/`do` and `fi`/`esac`/`done` words (or the csh set),
//! - `{`/`[` and `}`/`]` operators,
//! - a here-document announcement and the end of its body,
//! - optionally, runs of two or more comment lines.
//!
//! Levels use the classic packed encoding: the low 12 bits hold the depth
//! offset by [`FoldLevel::BASE`], bits 12 and 13 hold the flags.

use std::ops::Range;

use bitflags::bitflags;
use shl_lexer_core::char_class::is_space;
use shl_lexer_core::{BoundedBuf, Style};

use crate::document::Document;
use crate::properties::LexerOptions;

bitflags! {
    /// Per-line fold flags, stored above the level number.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FoldFlags: u32 {
        /// Line has no visible characters.
        const WHITE = 0x1000;
        /// Line opens a fold.
        const HEADER = 0x2000;
    }
}

/// Packed fold level of one line.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldLevel(u32);

impl FoldLevel {
    /// Level number of top-level lines.
    pub const BASE: u32 = 0x400;
    pub const NUMBER_MASK: u32 = 0x0FFF;

    pub fn new(number: u32, flags: FoldFlags) -> Self {
        FoldLevel(number.min(Self::NUMBER_MASK) | flags.bits())
    }

    pub const fn from_raw(raw: u32) -> Self {
        FoldLevel(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn number(self) -> u32 {
        self.0 & Self::NUMBER_MASK
    }

    pub fn flags(self) -> FoldFlags {
        FoldFlags::from_bits_truncate(self.0)
    }

    /// Nesting depth relative to [`BASE`](Self::BASE). Negative when the
    /// text closes more blocks than it opens.
    pub fn depth(self) -> i64 {
        i64::from(self.number()) - i64::from(Self::BASE)
    }

    pub fn is_header(self) -> bool {
        self.flags().contains(FoldFlags::HEADER)
    }

    pub fn is_white(self) -> bool {
        self.flags().contains(FoldFlags::WHITE)
    }
}

impl Default for FoldLevel {
    fn default() -> Self {
        FoldLevel(Self::BASE)
    }
}

impl std::fmt::Debug for FoldLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FoldLevel({:#x}", self.number())?;
        if self.is_header() {
            f.write_str(" header")?;
        }
        if self.is_white() {
            f.write_str(" white")?;
        }
        f.write_str(")")
    }
}

/// Lines a fold pass touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldReport {
    pub lines: Range<usize>,
    /// The pass continued past the requested range because levels below it
    /// had changed.
    pub extended: bool,
}

/// Longest fold keyword worth remembering.
const FOLD_WORD_MAX: usize = 15;

/// Level change contributed by a reserved word.
fn word_delta(word: &[u8], csh: bool) -> i64 {
    if csh {
        match word {
            b"if" | b"foreach" | b"switch" | b"while" => 1,
            b"end" | b"endif" | b"endsw" => -1,
            _ => 0,
        }
    } else {
        match word {
            b"if" | b"case" | b"do" => 1,
            b"fi" | b"esac" | b"done" => -1,
            _ => 0,
        }
    }
}

/// Whether the first non-blank byte of `line` is styled as a comment.
/// Covers `#` comments and m4 `dnl` lines alike.
fn is_comment_line<D: Document + ?Sized>(doc: &D, line: usize) -> bool {
    if line >= doc.line_count() {
        return false;
    }
    for pos in doc.line_start(line)..doc.line_start(line + 1) {
        match doc.byte_at(pos) {
            b' ' | b'\t' => {}
            _ => return doc.style_at(pos) == Style::CommentLine,
        }
    }
    false
}

fn clamp_number(level: i64) -> u32 {
    u32::try_from(level.clamp(0, i64::from(FoldLevel::NUMBER_MASK))).unwrap_or(0)
}

/// Store the level of a finished line.
fn finish_line<D: Document + ?Sized>(
    doc: &mut D,
    line: usize,
    level_prev: i64,
    level_current: i64,
    visible: usize,
    options: &LexerOptions,
) {
    let mut flags = FoldFlags::empty();
    if visible == 0 && options.fold_compact {
        flags |= FoldFlags::WHITE;
    }
    if level_current > level_prev && visible > 0 {
        flags |= FoldFlags::HEADER;
    }
    let level = FoldLevel::new(clamp_number(level_prev), flags);
    if level != doc.fold_level(line) {
        doc.set_fold_level(line, level);
    }
}

/// Compute fold levels for the lines covering `start..start + len`.
///
/// The range is widened to whole lines. When the level entering the next
/// line differs from what is stored there, folding carries on line by line
/// until the stored levels agree again or the document ends.
#[tracing::instrument(level = "debug", skip(doc, options))]
pub fn fold<D: Document + ?Sized>(
    doc: &mut D,
    start: usize,
    len: usize,
    options: &LexerOptions,
) -> FoldReport {
    let doc_len = doc.len();
    let mut first_line = doc.line_of_offset(start.min(doc_len));
    let requested_end = start.saturating_add(len).min(doc_len);
    if options.fold_comment {
        // comment blocks look one line ahead, so the line above may change too
        first_line = first_line.saturating_sub(1);
    }
    let start = doc.line_start(first_line);
    let requested_end = requested_end.max(start);
    let mut end = if requested_end > start {
        doc.line_start(doc.line_of_offset(requested_end - 1) + 1)
    } else {
        start
    };

    let mut line = first_line;
    let mut level_prev = i64::from(doc.fold_level(line).number());
    let mut level_current = level_prev;
    let mut visible = 0usize;
    let mut skip_here = false;
    let mut word = BoundedBuf::<FOLD_WORD_MAX>::new();
    let mut extended = false;

    let mut i = start;
    loop {
        if i >= end {
            let stale = i < doc_len
                && i == doc.line_start(line)
                && i64::from(doc.fold_level(line).number()) != level_prev;
            if !stale {
                break;
            }
            end = doc.line_start(line + 1).max(i + 1);
            extended = true;
        }

        let ch = doc.byte_at(i);
        let ch_next = doc.byte_at(i + 1);
        let style = doc.style_at(i);
        let style_next = doc.style_at(i + 1);
        let at_eol = ch == b'\n';

        if options.fold_comment && at_eol && is_comment_line(doc, line) {
            let prev_comment = line.checked_sub(1).is_some_and(|l| is_comment_line(doc, l));
            let next_comment = is_comment_line(doc, line + 1);
            if !prev_comment && next_comment {
                level_current += 1;
            } else if prev_comment && !next_comment {
                level_current -= 1;
            }
        }

        if style != Style::HereDelim {
            // only the pair overlapping a `<<<` run is skipped
            skip_here = false;
        }

        match style {
            Style::Word => {
                word.push_truncating(ch);
                if style_next != Style::Word {
                    level_current += word_delta(word.as_bytes(), options.csh);
                    word.clear();
                }
            }
            Style::Operator => match ch {
                b'{' | b'[' => level_current += 1,
                b'}' | b']' => level_current -= 1,
                _ => {}
            },
            Style::HereDelim if ch == b'<' && ch_next == b'<' => {
                // `<<<` is a here-string and opens nothing
                if doc.byte_at(i + 2) == b'<' {
                    skip_here = true;
                } else if skip_here {
                    skip_here = false;
                } else {
                    level_current += 1;
                }
            }
            Style::HereQ if style_next == Style::Default => level_current -= 1,
            _ => {}
        }

        if !is_space(ch) {
            visible += 1;
        }
        if at_eol {
            finish_line(doc, line, level_prev, level_current, visible, options);
            line += 1;
            level_prev = level_current;
            visible = 0;
        }
        i += 1;
    }

    if i >= doc_len {
        finish_line(doc, line, level_prev, level_current, visible, options);
    } else {
        // the next line's flags belong to its own pass
        let flags = doc.fold_level(line).flags();
        doc.set_fold_level(line, FoldLevel::new(clamp_number(level_prev), flags));
    }
    tracing::debug!(first_line, last_line = line, extended, "folded");
    FoldReport {
        lines: first_line..line + 1,
        extended,
    }
}
