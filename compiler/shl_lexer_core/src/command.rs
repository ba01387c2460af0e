//! Command-context state machine.
//!
//! Shell syntax is decided by position inside a command: `if` is a keyword at
//! the start of a command and a file name after `cat`, `(` opens a subshell
//! or an arithmetic expression, `]` closes a test or is just a glob. The
//! [`CommandContext`] tracks where the cursor is in the current command
//! segment so the driver can resolve these ambiguities.
//!
//! State only changes at token boundaries. While a token is being styled the
//! successor state is held in `pending`; [`CommandContext::commit`] applies it
//! once the token's style run closes. Operators that open or close test and
//! arithmetic expressions write the state directly.

use crate::char_class::{is_operator, is_space};
use crate::style::Style;
use crate::window::ByteWindow;
use crate::word_list::{KeywordLists, WordList};

/// Position inside the current command segment.
///
/// The discriminants are persisted per line by hosts.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CommandState {
    /// Inside the arguments of a command.
    Body = 0,
    /// At the start of a command, where keywords are recognised.
    #[default]
    Start = 1,
    /// After `for`, `case` or `select`, waiting for `in` or `do`.
    Word = 2,
    /// Inside `test`, `[ ]` or `[[ ]]`.
    Test = 3,
    /// Inside `(( ))`.
    Arith = 4,
    /// A command delimiter was just styled.
    Delim = 5,
}

impl CommandState {
    /// Decode a persisted value. Unknown values decode as `Body`, which a
    /// restart search never stops at.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => CommandState::Start,
            2 => CommandState::Word,
            3 => CommandState::Test,
            4 => CommandState::Arith,
            5 => CommandState::Delim,
            _ => CommandState::Body,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<CommandState> for u8 {
    fn from(state: CommandState) -> u8 {
        state.as_u8()
    }
}

/// Which construct opened the current test expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TestKind {
    /// The `test` builtin. Command delimiters still end it.
    #[default]
    Command,
    /// `[[ ... ]]`
    DoubleBracket,
    /// `[ ... ]`
    SingleBracket,
}

/// How the driver should finish a word token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordEnd {
    /// Restyle the word and return to the default style.
    Default(Style),
    /// `name+=`: restyle the word, then start an operator.
    Append(Style),
    /// m4 `dnl`: the rest of the line is a comment.
    M4Comment,
}

/// Command-segment tracker for one lexing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandContext {
    state: CommandState,
    pending: CommandState,
    test_kind: TestKind,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CommandState {
        self.state
    }

    pub fn test_kind(&self) -> TestKind {
        self.test_kind
    }

    /// Reset the successor state before a byte is examined. Test, arithmetic
    /// and `for`/`case` headers persist across tokens, anything else falls
    /// back to `Body`.
    pub fn begin(&mut self) {
        self.pending = match self.state {
            s @ (CommandState::Test | CommandState::Arith | CommandState::Word) => s,
            _ => CommandState::Body,
        };
    }

    /// A styled token just ended: adopt the successor state.
    pub fn commit(&mut self) {
        self.state = self.pending;
    }

    /// A physical line starts. Unless the previous line was continued with
    /// a backslash, a new command begins.
    pub fn line_start(&mut self, line: usize, continued: bool) {
        if line > 0 && !continued {
            self.state = CommandState::Start;
        }
    }

    /// An operator token ended. `escaped_newline` is set when the operator
    /// was a backslash line continuation.
    pub fn operator_end(&mut self, escaped_newline: bool) {
        if self.state == CommandState::Delim {
            self.pending = CommandState::Start;
        } else if escaped_newline {
            self.pending = self.state;
        }
    }

    /// Classify a finished word. `ch` and `next` are the bytes after it.
    pub fn classify_word(&mut self, word: &[u8], ch: u8, next: u8, lists: &KeywordLists) -> WordEnd {
        // `0` is the end of the document
        let keyword_ends = ch == 0 || is_space(ch) || lists.delimiters.contains(&[ch]);
        let at_start = self.state == CommandState::Start;

        if self.state == CommandState::Word {
            // only `in` and `do` can close a for/case/select header
            let style = match word {
                b"in" if keyword_ends => {
                    self.pending = CommandState::Body;
                    Style::Word
                }
                b"do" if keyword_ends => {
                    self.pending = CommandState::Start;
                    Style::Word
                }
                _ => Style::Identifier,
            };
            return WordEnd::Default(style);
        }

        let style = if word == b"test" {
            if at_start && keyword_ends {
                self.pending = CommandState::Test;
                self.test_kind = TestKind::Command;
            }
            if keyword_ends {
                Style::Word
            } else {
                Style::Identifier
            }
        } else if lists.structural.contains(word) {
            if at_start && keyword_ends {
                self.pending = CommandState::Start;
                Style::Word
            } else {
                Style::Identifier
            }
        } else if lists.structural_in.contains(word) {
            if at_start && keyword_ends {
                self.pending = CommandState::Word;
                Style::Word
            } else {
                Style::Identifier
            }
        } else if word.first() == Some(&b'-') {
            // options are plain words; `-f` only means a file test inside a test
            if self.state == CommandState::Test {
                Style::Word
            } else {
                Style::Identifier
            }
        } else if at_start && keyword_ends && lists.keywords.contains(word) {
            Style::Word
        } else {
            Style::Identifier
        };

        if word == b"dnl" {
            WordEnd::M4Comment
        } else if ch == b'+' && next == b'=' {
            WordEnd::Append(style)
        } else {
            WordEnd::Default(style)
        }
    }

    /// An operator token starts under the window.
    ///
    /// Recognises the brackets that open and close test and arithmetic
    /// expressions and the command delimiters. Multi-byte operators advance
    /// the window over their extra bytes.
    pub fn operator<W: ByteWindow + ?Sized>(&mut self, w: &mut W, delimiters: &WordList) {
        if matches!(self.state, CommandState::Start | CommandState::Body) {
            if w.matches(b"((") {
                self.state = CommandState::Arith;
                w.advance();
            } else if w.matches(b"[[") && is_space(w.relative(2)) {
                self.state = CommandState::Test;
                self.test_kind = TestKind::DoubleBracket;
                w.advance();
            } else if w.ch() == b'[' && is_space(w.next()) {
                self.state = CommandState::Test;
                self.test_kind = TestKind::SingleBracket;
            }
        }
        // `for ((i = 0; i < n; i++))`
        if self.state == CommandState::Word && w.matches(b"((") {
            self.state = CommandState::Arith;
            w.advance();
            return;
        }

        let honours_delimiters = match self.state {
            CommandState::Start | CommandState::Body | CommandState::Word => true,
            CommandState::Test => self.test_kind == TestKind::Command,
            CommandState::Arith | CommandState::Delim => false,
        };
        if honours_delimiters {
            let (ch, next) = (w.ch(), w.next());
            if is_operator(next) && delimiters.contains(&[ch, next]) {
                w.advance();
                self.state = CommandState::Delim;
                return;
            }
            if delimiters.contains(&[ch]) {
                self.state = CommandState::Delim;
                return;
            }
        }

        if self.state == CommandState::Arith && w.matches(b"))") {
            self.state = CommandState::Body;
            w.advance();
        } else if self.state == CommandState::Test && is_space(w.prev()) {
            if w.matches(b"]]") && self.test_kind == TestKind::DoubleBracket {
                w.advance();
                self.state = CommandState::Body;
            } else if w.ch() == b']' && self.test_kind == TestKind::SingleBracket {
                self.state = CommandState::Body;
            }
        }
    }
}
