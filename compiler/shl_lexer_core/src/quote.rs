//! Nested quoting contexts.
//!
//! Double-quoted strings and command substitutions can contain each other to
//! arbitrary depth in the shell. The lexer tracks them with a fixed-depth
//! stack of [`QuoteFrame`]s. Once the stack is full further openers are
//! ignored: the innermost frame keeps consuming text, so styling degrades
//! without the pass failing.
//!
//! Single quotes and `${...}` never nest other contexts and use the simpler
//! [`QuotePair`].

/// Deepest nesting the stack records, not counting the outermost frame.
pub const QUOTE_STACK_MAX: usize = 7;

/// What kind of quoted region a frame represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// `'...'` inside a substitution. No escapes.
    #[default]
    Literal,
    /// `"..."`
    String,
    /// `$'...'`
    CString,
    /// `$"..."`
    LocaleString,
    /// `$(...)`
    Command,
    /// `` `...` ``
    Backtick,
}

impl QuoteKind {
    /// Whether `\` escapes the next byte in this context.
    #[inline]
    pub fn has_escapes(self) -> bool {
        self != QuoteKind::Literal
    }
}

/// Closing byte for an opening byte. Brackets pair up, anything else closes itself.
#[inline]
pub const fn closing_of(open: u8) -> u8 {
    match open {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        b'<' => b'>',
        other => other,
    }
}

/// One level of quoting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuoteFrame {
    pub open: u8,
    pub close: u8,
    pub kind: QuoteKind,
    /// Unclosed openers of this frame's own bracket.
    pub count: u32,
}

impl QuoteFrame {
    pub const fn new(open: u8, kind: QuoteKind) -> Self {
        QuoteFrame {
            open,
            close: closing_of(open),
            kind,
            count: 1,
        }
    }
}

/// Result of feeding one byte to a [`QuoteStack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteStep {
    /// Byte consumed inside the current context.
    Continue,
    /// Byte consumed and the next byte belongs to it too (escapes and the `(`
    /// of `$(`); the caller advances once more.
    Advance,
    /// The outermost context closed on this byte.
    Close,
}

/// Fixed-depth stack of quoting contexts.
#[derive(Clone, Debug, Default)]
pub struct QuoteStack {
    current: QuoteFrame,
    saved: [QuoteFrame; QUOTE_STACK_MAX],
    depth: usize,
}

impl QuoteStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new outermost region, discarding any previous nesting.
    pub fn start(&mut self, open: u8, kind: QuoteKind) {
        self.current = QuoteFrame::new(open, kind);
        self.depth = 0;
    }

    /// Enter a nested context. Silently ignored once the stack is full.
    pub fn push(&mut self, open: u8, kind: QuoteKind) {
        if self.depth >= QUOTE_STACK_MAX {
            return;
        }
        self.saved[self.depth] = self.current;
        self.depth += 1;
        self.current = QuoteFrame::new(open, kind);
    }

    /// Leave the innermost nested context. No-op at the outermost frame.
    pub fn pop(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        self.current = self.saved[self.depth];
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn current(&self) -> &QuoteFrame {
        &self.current
    }

    /// Feed the byte under the cursor.
    pub fn step(&mut self, ch: u8, next: u8) -> QuoteStep {
        let QuoteFrame {
            open, close, kind, ..
        } = self.current;
        if ch == b'\\' && open != b'\\' {
            return if kind.has_escapes() {
                QuoteStep::Advance
            } else {
                QuoteStep::Continue
            };
        }
        if ch == close {
            self.current.count = self.current.count.saturating_sub(1);
            if self.current.count == 0 {
                if self.depth == 0 {
                    return QuoteStep::Close;
                }
                self.pop();
            }
            return QuoteStep::Continue;
        }
        if ch == open {
            self.current.count += 1;
            return QuoteStep::Continue;
        }
        match kind {
            QuoteKind::String | QuoteKind::LocaleString => match (ch, next) {
                (b'`', _) => self.push(ch, QuoteKind::Backtick),
                (b'$', b'(') => {
                    self.push(next, QuoteKind::Command);
                    return QuoteStep::Advance;
                }
                _ => {}
            },
            QuoteKind::Command | QuoteKind::Backtick => match (ch, next) {
                (b'\'', _) => self.push(ch, QuoteKind::Literal),
                (b'"', _) => self.push(ch, QuoteKind::String),
                (b'`', _) => self.push(ch, QuoteKind::Backtick),
                (b'$', b'\'') => {
                    self.push(next, QuoteKind::CString);
                    return QuoteStep::Advance;
                }
                (b'$', b'"') => {
                    self.push(next, QuoteKind::LocaleString);
                    return QuoteStep::Advance;
                }
                (b'$', b'(') => {
                    self.push(next, QuoteKind::Command);
                    return QuoteStep::Advance;
                }
                _ => {}
            },
            QuoteKind::Literal | QuoteKind::CString => {}
        }
        QuoteStep::Continue
    }
}

/// Result of feeding one byte to a [`QuotePair`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairStep {
    Continue,
    /// Escape: the next byte is consumed without inspection.
    SkipNext,
    /// Outermost closer reached on this byte.
    Close,
}

/// Counting pair for `'...'` and `${...}`, which nest only their own bracket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuotePair {
    pub count: u32,
    pub open: u8,
    pub close: u8,
}

impl QuotePair {
    pub fn start(&mut self, open: u8) {
        self.count = 1;
        self.open = open;
        self.close = closing_of(open);
    }

    /// Feed the byte under the cursor. `escapes` enables `\` handling.
    pub fn step(&mut self, ch: u8, escapes: bool) -> PairStep {
        if escapes && ch == b'\\' && self.open != b'\\' {
            return PairStep::SkipNext;
        }
        if ch == self.close {
            self.count = self.count.saturating_sub(1);
            if self.count == 0 {
                return PairStep::Close;
            }
        } else if escapes && ch == self.open {
            self.count += 1;
        }
        PairStep::Continue
    }
}

#[cfg(test)]
mod tests;
