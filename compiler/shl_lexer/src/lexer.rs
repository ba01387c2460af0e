//! The colouring driver.
//!
//! [`BashLexer::lex`] restarts at a safe line, then walks the document with a
//! [`StyleCursor`], handing each byte to the sub-machine owning the current
//! style. When the token in progress ends, the byte is offered again in the
//! default style to decide what starts next.
//!
//! Each line start records the command state in effect there. A pass keeps
//! going past the requested range until it reaches a line whose new and old
//! recorded states are both `Start`, so an edit that opens a string or a
//! here-document restyles everything it swallowed.

use std::ops::Range;

use shl_lexer_core::char_class::{
    is_digit, is_file_test, is_meta, is_operator, is_param, is_space, is_word, is_word_start,
};
use shl_lexer_core::{
    glob_scan, Announce, BodyStart, ByteWindow, Collect, CommandContext, CommandState,
    HereDoc, HereDocPhase, KeywordLists, NumberLiteral, NumberStep, PairStep, QuoteKind, QuotePair,
    QuoteStack, QuoteStep, Style, WordEnd, HERE_DELIM_MAX,
};

use crate::cursor::StyleCursor;
use crate::document::Document;
use crate::fold::{self, FoldReport};
use crate::incremental::TextChange;
use crate::properties::LexerOptions;

/// Longest word compared against the keyword lists.
const WORD_MAX: usize = 512;

/// Outcome of one lexing pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexReport {
    /// Line the pass restarted from.
    pub restart_line: usize,
    /// Byte range whose styles were rewritten.
    pub styled: Range<usize>,
    /// The pass ran past the requested range to resynchronise.
    pub extended: bool,
}

/// Shell lexer configured with a set of keyword lists.
#[derive(Clone, Debug, Default)]
pub struct BashLexer {
    lists: KeywordLists,
}

impl BashLexer {
    pub fn new(lists: KeywordLists) -> Self {
        BashLexer { lists }
    }

    pub fn keyword_lists(&self) -> &KeywordLists {
        &self.lists
    }

    /// Style `start..start + len`, plus whatever it takes to restart and
    /// resynchronise around it.
    #[tracing::instrument(level = "debug", skip(self, doc))]
    pub fn lex<D: Document + ?Sized>(&self, doc: &mut D, start: usize, len: usize) -> LexReport {
        let start = start.min(doc.len());
        let requested_end = start.saturating_add(len).min(doc.len());
        let restart_line = crate::restart::restart_line(doc, start);
        let from = doc.line_start(restart_line);

        let mut pass = Pass::new(&self.lists, doc, from, requested_end);
        pass.run();
        let report = LexReport {
            restart_line,
            styled: from..pass.sc.pos().min(pass.sc.doc().len()),
            extended: pass.extended,
        };
        tracing::debug!(
            restart_line,
            styled = ?report.styled,
            extended = report.extended,
            "lexed"
        );
        report
    }

    /// Recompute fold levels for `start..start + len`.
    pub fn fold<D: Document + ?Sized>(&self, doc: &mut D, start: usize, len: usize) -> FoldReport {
        let options = LexerOptions::from_document(doc);
        fold::fold(doc, start, len, &options)
    }

    /// Lex, then fold everything the lexer restyled.
    pub fn colourise<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        start: usize,
        len: usize,
    ) -> (LexReport, FoldReport) {
        let report = self.lex(doc, start, len);
        let folded = self.fold(doc, report.styled.start, report.styled.len());
        (report, folded)
    }

    /// Lex and fold the whole document.
    pub fn colourise_all<D: Document + ?Sized>(&self, doc: &mut D) -> (LexReport, FoldReport) {
        let len = doc.len();
        self.colourise(doc, 0, len)
    }

    /// Bring styles and folds up to date after `change` was applied to `doc`.
    pub fn apply_change<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        change: TextChange,
    ) -> (LexReport, FoldReport) {
        tracing::trace!(?change, "re-lexing after edit");
        self.colourise(doc, change.start, change.new_len)
    }
}

/// Whether line continuation via `\` applies at a line start. Handles both
/// LF and CR LF endings.
fn is_continued<W: ByteWindow + ?Sized>(w: &W) -> bool {
    w.relative(-2) == b'\\'
        || (w.relative(-3) == b'\\' && w.relative(-2) == b'\r' && w.prev() == b'\n')
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// State of a single pass. Dropped when the pass ends.
struct Pass<'a, 'd, D: Document + ?Sized> {
    lists: &'a KeywordLists,
    sc: StyleCursor<'d, D>,
    cmd: CommandContext,
    quotes: QuoteStack,
    pair: QuotePair,
    heredoc: HereDoc,
    number: NumberLiteral,
    requested_end: usize,
    /// First line whose state has not been written this pass.
    next_line: usize,
    extended: bool,
}

impl<'a, 'd, D: Document + ?Sized> Pass<'a, 'd, D> {
    fn new(lists: &'a KeywordLists, doc: &'d mut D, from: usize, requested_end: usize) -> Self {
        let sc = StyleCursor::new(doc, from, Style::Default);
        let next_line = sc.line();
        Pass {
            lists,
            sc,
            cmd: CommandContext::new(),
            quotes: QuoteStack::new(),
            pair: QuotePair::default(),
            heredoc: HereDoc::new(),
            number: NumberLiteral::default(),
            requested_end,
            next_line,
            extended: false,
        }
    }

    fn run(&mut self) {
        while self.sc.more() {
            if self.sc.at_line_start() && self.record_line() == Flow::Stop {
                break;
            }
            self.step();
            self.sc.forward();
        }
        self.sc.complete();
        if !self.sc.more() {
            // a token crossing into the last line skipped its line start
            let line_count = self.sc.doc().line_count();
            self.mark_skipped_lines(line_count);
        }
    }

    /// Lines the cursor crossed inside a token cannot be restarted from.
    fn mark_skipped_lines(&mut self, up_to: usize) {
        while self.next_line < up_to {
            self.sc
                .doc_mut()
                .set_line_state(self.next_line, CommandState::Body.as_u8());
            self.next_line += 1;
        }
    }

    fn record_line(&mut self) -> Flow {
        let line = self.sc.line();
        self.mark_skipped_lines(line);

        let state = self.sc.state();
        let recorded = if state.spans_lines() {
            // inside a multi-line token: keep the command state, force a deeper restart
            CommandState::Body
        } else {
            self.cmd.line_start(line, is_continued(&self.sc));
            if state == Style::Default {
                self.cmd.state()
            } else {
                CommandState::Body
            }
        };
        let prior = CommandState::from_u8(
            self.sc
                .doc_mut()
                .set_line_state(line, recorded.as_u8()),
        );
        self.next_line = line + 1;

        if self.sc.pos() > self.requested_end {
            if recorded == CommandState::Start && prior == CommandState::Start {
                tracing::trace!(line, "resynchronised");
                return Flow::Stop;
            }
            self.extended = true;
        }
        Flow::Continue
    }

    fn step(&mut self) {
        self.cmd.begin();
        let style_prev = self.sc.state();

        match style_prev {
            Style::Operator => {
                self.sc.set_state(Style::Default);
                self.cmd.operator_end(self.sc.prev() == b'\\');
            }
            Style::Word => self.word(),
            Style::Identifier => self.identifier(),
            Style::Number => {
                if self.number.step(self.sc.ch()) == NumberStep::End {
                    self.sc.change_state(self.number.style());
                    self.sc.set_state(Style::Default);
                }
            }
            Style::CommentLine => {
                if self.sc.at_line_end() && self.sc.prev() != b'\\' {
                    self.sc.set_state(Style::Default);
                }
            }
            Style::HereDelim => self.here_delimiter(),
            Style::HereQ => self.here_body(),
            Style::Scalar => {
                if !is_param(self.sc.ch()) {
                    if self.sc.length_current() == 1 {
                        // special parameters such as `$_` or `$(`
                        self.sc.forward_set_state(Style::Default);
                    } else {
                        self.sc.set_state(Style::Default);
                    }
                }
            }
            Style::String | Style::Backticks => {
                match self.quotes.step(self.sc.ch(), self.sc.next()) {
                    QuoteStep::Continue => {}
                    QuoteStep::Advance => self.sc.forward(),
                    QuoteStep::Close => self.sc.forward_set_state(Style::Default),
                }
            }
            Style::Param => self.pair_step(true),
            Style::Character => self.pair_step(false),
            Style::Default | Style::Error => {}
        }

        // the `<<` line ended: the body starts on the next line
        if self.heredoc.is_collecting() && self.sc.at_line_end() {
            let in_delimiter = self.sc.state() == Style::HereDelim;
            match self.heredoc.end_of_line(in_delimiter) {
                BodyStart::Body => self.sc.set_state(Style::HereQ),
                BodyStart::Error => {
                    tracing::trace!(pos = self.sc.pos(), "malformed here-document delimiter");
                    self.sc.change_state(Style::Error);
                    self.sc.set_state(Style::Default);
                }
            }
        }

        if style_prev != Style::Default && self.sc.state() == Style::Default {
            self.cmd.commit();
        }
        if self.sc.state() == Style::Default {
            self.start_token(style_prev);
        }
    }

    fn word(&mut self) {
        let (ch, next) = (self.sc.ch(), self.sc.next());
        if is_word(ch) && !(ch == b'+' && next == b'=') {
            return;
        }
        let text = self.sc.copy_current::<WORD_MAX>();
        match self.cmd.classify_word(text.as_bytes(), ch, next, self.lists) {
            WordEnd::Default(style) => {
                self.sc.change_state(style);
                self.sc.set_state(Style::Default);
            }
            WordEnd::Append(style) => {
                self.sc.change_state(style);
                self.sc.set_state(Style::Operator);
            }
            WordEnd::M4Comment => {
                self.sc.change_state(Style::CommentLine);
                if self.sc.at_line_end() {
                    self.sc.set_state(Style::Default);
                }
            }
        }
    }

    fn identifier(&mut self) {
        let ch = self.sc.ch();
        if self.sc.prev() == b'\\' {
            // escaped byte
            self.sc.forward_set_state(Style::Default);
        } else if !is_word(ch)
            || (self.cmd.state() == CommandState::Arith && !is_word_start(ch))
        {
            self.sc.set_state(Style::Default);
        }
    }

    fn pair_step(&mut self, escapes: bool) {
        match self.pair.step(self.sc.ch(), escapes) {
            PairStep::Continue => {}
            PairStep::SkipNext => self.sc.forward(),
            PairStep::Close => self.sc.forward_set_state(Style::Default),
        }
    }

    fn here_delimiter(&mut self) {
        match self.heredoc.phase() {
            HereDocPhase::Announced => {
                match self.heredoc.announce(self.sc.next(), self.cmd.state()) {
                    Announce::Quoted => self.sc.forward(),
                    Announce::Bare | Announce::Whitespace | Announce::ZeroLength => {}
                    Announce::HereString => {
                        self.sc.forward();
                        self.sc.forward_set_state(Style::Default);
                    }
                    Announce::LeftShift => {
                        self.sc.change_state(Style::Operator);
                        self.sc.forward_set_state(Style::Default);
                    }
                }
            }
            HereDocPhase::Collecting => {
                let (prev, ch, next) = (self.sc.prev(), self.sc.ch(), self.sc.next());
                match self.heredoc.collect(prev, ch, next) {
                    Collect::Appended | Collect::Skipped => {}
                    Collect::Closed => self.sc.forward_set_state(Style::Default),
                    Collect::Ended => self.sc.set_state(Style::Default),
                    Collect::Overflow => {
                        tracing::trace!(pos = self.sc.pos(), "here-document delimiter too long");
                        self.sc.change_state(Style::Error);
                        self.sc.set_state(Style::Default);
                    }
                }
            }
            HereDocPhase::Body => {}
        }
    }

    /// Compare each body line against the delimiter.
    fn here_body(&mut self) {
        if !self.sc.at_line_start() {
            return;
        }
        self.sc.set_state(Style::HereQ);
        let mut tabs = 0;
        while self.sc.ch() == b'\t' && !self.sc.at_line_end() {
            self.sc.forward();
            tabs += 1;
        }
        if tabs > 0 {
            self.sc.set_state(Style::HereQ);
        }
        while !self.sc.at_line_end() {
            self.sc.forward();
        }
        // one spare byte for a trailing `\r`
        if self.sc.length_current() > HERE_DELIM_MAX + 1 {
            return;
        }
        let line = self.sc.copy_current::<{ HERE_DELIM_MAX + 1 }>();
        if self.heredoc.terminates(line.as_bytes(), tabs) {
            self.sc.set_state(Style::Default);
            self.heredoc.finish();
        }
    }

    /// Decide what the byte under the cursor starts.
    fn start_token(&mut self, style_prev: Style) {
        let (ch, next) = (self.sc.ch(), self.sc.next());
        if ch == b'\\' {
            // any byte but a newline can be escaped
            self.sc.set_state(Style::Identifier);
            if next == b'\r' || next == b'\n' {
                self.sc.set_state(Style::Default);
            }
        } else if is_digit(ch) {
            self.sc.set_state(Style::Number);
            let (number, hex_prefix) = NumberLiteral::start(ch, next);
            self.number = number;
            if hex_prefix {
                self.sc.forward();
            }
        } else if is_word_start(ch) {
            self.sc.set_state(Style::Word);
        } else if ch == b'#' {
            self.hash(style_prev);
        } else if ch == b'"' {
            self.sc.set_state(Style::String);
            self.quotes.start(ch, QuoteKind::String);
        } else if ch == b'\'' {
            self.sc.set_state(Style::Character);
            self.pair.start(ch);
        } else if ch == b'`' {
            self.sc.set_state(Style::Backticks);
            self.quotes.start(ch, QuoteKind::Backtick);
        } else if ch == b'$' {
            self.dollar();
        } else if self.sc.matches(b"<<") {
            self.sc.set_state(Style::HereDelim);
            let strip_tabs = self.sc.relative(2) == b'-';
            self.heredoc.begin(strip_tabs);
            if strip_tabs {
                self.sc.forward();
            }
        } else if ch == b'-'
            && is_file_test(next)
            && !is_word(self.sc.relative(2))
            && is_space(self.sc.prev())
        {
            // one-letter file test such as `-f`
            self.sc.set_state(Style::Word);
            self.sc.forward();
        } else if is_operator(ch) {
            self.operator();
        }
    }

    fn hash(&mut self, style_prev: Style) {
        let starts_comment = style_prev != Style::Word
            && style_prev != Style::Identifier
            && (self.sc.pos() == 0 || is_meta(self.sc.prev()));
        self.sc.set_state(if starts_comment {
            Style::CommentLine
        } else {
            Style::Word
        });
        if self.cmd.state() != CommandState::Arith {
            return;
        }
        // zsh arithmetic: `[#8]` output base, `##^A` and `##a` character codes
        let next = self.sc.next();
        if self.sc.prev() == b'[' {
            self.sc.set_state(Style::Word);
            if next == b'#' {
                self.sc.forward();
            }
        } else if self.sc.matches(b"##^") && self.sc.relative(3).is_ascii_uppercase() {
            self.sc.set_state(Style::Identifier);
            self.sc.forward_n(3);
        } else if next == b'#' && !is_space(self.sc.relative(2)) {
            self.sc.set_state(Style::Identifier);
            self.sc.forward_n(2);
        } else if is_word_start(next) {
            self.sc.set_state(Style::Identifier);
        }
    }

    fn dollar(&mut self) {
        let next = self.sc.next();
        if next == b'(' || next == b'[' {
            // `$((`, `$(` and `$[` are handled as operators on the next byte
            self.sc.set_state(Style::Operator);
            return;
        }
        self.sc.set_state(Style::Scalar);
        self.sc.forward();
        let ch = self.sc.ch();
        match ch {
            b'{' => {
                self.sc.change_state(Style::Param);
                self.pair.start(ch);
            }
            b'\'' => {
                self.sc.change_state(Style::String);
                self.quotes.start(ch, QuoteKind::CString);
            }
            b'"' => {
                self.sc.change_state(Style::String);
                self.quotes.start(ch, QuoteKind::LocaleString);
            }
            b'`' => {
                self.sc.change_state(Style::Backticks);
                self.quotes.start(ch, QuoteKind::Backtick);
            }
            _ => {}
        }
    }

    fn operator(&mut self) {
        self.sc.set_state(Style::Operator);
        let (ch, next) = (self.sc.ch(), self.sc.next());
        // zsh globs such as `(#i)*.c` contain no whitespace and never appear in arithmetic
        if self.cmd.state() != CommandState::Arith && ch == b'(' && next != b'(' {
            let len = glob_scan(&self.sc);
            if len > 1 {
                self.sc.set_state(Style::Identifier);
                self.sc.forward_n(len);
                return;
            }
        }
        self.cmd.operator(&mut self.sc, &self.lists.delimiters);
    }
}
