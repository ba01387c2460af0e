//! Here-document tracking.
//!
//! A here-document moves through three phases:
//!
//! 1. **Announced**: `<<` (or `<<-`) was just seen. The next byte decides
//!    whether this is a quoted or bare delimiter, a `<<<` here-string, or a
//!    left shift such as `<<$n` or `<<=` inside arithmetic.
//! 2. **Collecting**: delimiter bytes are accumulated, honouring quoting.
//!    Single quotes have no escapes; double quotes only `\"` and `\\`.
//! 3. **Body**: every following line is compared with the delimiter until
//!    one matches. With `<<-` leading tabs are stripped first.
//!
//! The machine never touches the document. It answers with small action enums
//! that the styling driver turns into cursor operations.

use crate::bounded::BoundedBuf;
use crate::char_class::{is_heredoc, is_heredoc_start, is_left_shift, is_space};
use crate::command::CommandState;

/// Longest delimiter kept, in bytes.
pub const HERE_DELIM_MAX: usize = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HereDocPhase {
    #[default]
    Announced,
    Collecting,
    Body,
}

/// How the byte after `<<` was interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Announce {
    /// `'` or `"`: the driver steps over the quote.
    Quoted,
    /// A bare word follows.
    Bare,
    /// `<<<`: the driver styles it as one token and leaves.
    HereString,
    /// Whitespace between `<<` and the delimiter; ask again on the next byte.
    Whitespace,
    /// `<<$n`, `<<1` or `<<=` in arithmetic: a shift operator.
    LeftShift,
    /// Some other symbol. A deprecated zero-length delimiter.
    ZeroLength,
}

/// Outcome of offering one byte to the delimiter collector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collect {
    Appended,
    /// Escape prefix dropped from the delimiter.
    Skipped,
    /// Closing quote. The driver moves past it and returns to Default.
    Closed,
    /// A bare delimiter ended on this byte.
    Ended,
    /// The delimiter outgrew [`HERE_DELIM_MAX`]; style as error and reset.
    Overflow,
}

/// What to do with the line ending that closes the `<<` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyStart {
    /// Enter the here-document body.
    Body,
    /// Malformed delimiter: style it as an error and skip the body.
    Error,
}

/// State of the most recent here-document.
#[derive(Clone, Debug, Default)]
pub struct HereDoc {
    phase: HereDocPhase,
    quote: u8,
    quoted: bool,
    strip_tabs: bool,
    delimiter: BoundedBuf<HERE_DELIM_MAX>,
}

impl HereDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<<` seen. `strip_tabs` is set for `<<-`.
    pub fn begin(&mut self, strip_tabs: bool) {
        self.phase = HereDocPhase::Announced;
        self.strip_tabs = strip_tabs;
    }

    /// Classify the byte following the operator.
    pub fn announce(&mut self, next: u8, cmd: CommandState) -> Announce {
        self.quote = next;
        self.quoted = false;
        self.delimiter.clear();
        let in_arith = cmd == CommandState::Arith;
        let kind = match next {
            b'\'' | b'"' => {
                self.quoted = true;
                Announce::Quoted
            }
            b'=' if in_arith => Announce::LeftShift,
            b'=' => Announce::Bare,
            b'<' => Announce::HereString,
            b if is_heredoc_start(b) => Announce::Bare,
            b if is_space(b) => Announce::Whitespace,
            b if is_left_shift(b) => Announce::LeftShift,
            _ => Announce::ZeroLength,
        };
        if matches!(
            kind,
            Announce::Quoted | Announce::Bare | Announce::ZeroLength
        ) {
            self.phase = HereDocPhase::Collecting;
        }
        kind
    }

    /// Offer the byte under the cursor to the delimiter.
    pub fn collect(&mut self, prev: u8, ch: u8, next: u8) -> Collect {
        let q = self.quote;
        let append = (q == b'\'' && ch != q)
            || (self.quoted && ch != q && ch != b'\\')
            || (q != b'\'' && prev == b'\\')
            || is_heredoc(ch);
        let outcome = if append {
            Collect::Appended
        } else if self.quoted && ch == q {
            return Collect::Closed;
        } else if ch == b'\\' {
            // inside quotes only `\` and the quote itself consume the escape
            if self.quoted && next != q && next != b'\\' {
                Collect::Appended
            } else {
                return Collect::Skipped;
            }
        } else {
            // a quoted delimiter appends everything else, so only bare ones end here
            return Collect::Ended;
        };
        if self.delimiter.try_push(ch).is_err() {
            self.phase = HereDocPhase::Announced;
            return Collect::Overflow;
        }
        outcome
    }

    /// The line holding the operator ended while still collecting.
    ///
    /// `in_delimiter` is whether the cursor is still inside the delimiter
    /// token, which for a quoted delimiter means the closing quote is missing.
    pub fn end_of_line(&mut self, in_delimiter: bool) -> BodyStart {
        self.phase = HereDocPhase::Body;
        if self.quoted {
            if in_delimiter {
                return BodyStart::Error;
            }
            return BodyStart::Body;
        }
        if self.delimiter.is_empty() {
            return BodyStart::Error;
        }
        BodyStart::Body
    }

    /// Whether a body `line` (tabs already removed, `tabs` of them) closes
    /// the here-document.
    pub fn terminates(&self, line: &[u8], tabs: usize) -> bool {
        let indent_ok = tabs == 0 || self.strip_tabs;
        if line.is_empty() {
            // '' and "" delimiters close on an empty line
            return indent_ok && self.quoted && self.delimiter.is_empty();
        }
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        indent_ok && self.delimiter == *line
    }

    /// The terminating line was found.
    pub fn finish(&mut self) {
        self.phase = HereDocPhase::Announced;
    }

    pub fn phase(&self) -> HereDocPhase {
        self.phase
    }

    pub fn is_collecting(&self) -> bool {
        self.phase == HereDocPhase::Collecting
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    pub fn strips_tabs(&self) -> bool {
        self.strip_tabs
    }

    pub fn delimiter(&self) -> &[u8] {
        self.delimiter.as_bytes()
    }
}

#[cfg(test)]
mod tests;
