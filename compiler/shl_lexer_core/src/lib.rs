//! Host-independent building blocks of the shell highlighting lexer.
//!
//! Everything here is fixed-size and document-free: character classes, style
//! ids, and the small state machines (numerals, quoting, here-documents,
//! command context) that the colouring driver in `shl_lexer` composes one
//! byte at a time. Machines that need lookahead read it through the
//! [`ByteWindow`] trait, so each can be exercised against a plain byte slice.
//!
//! No allocation happens on the per-byte path. Keyword lists are the only
//! heap data and they are built once, up front.

pub mod bounded;
pub mod char_class;
pub mod command;
pub mod glob;
pub mod heredoc;
pub mod number;
pub mod quote;
pub mod style;
pub mod window;
pub mod word_list;

pub use bounded::{BoundedBuf, CapacityExceeded};
pub use char_class::CharClass;
pub use command::{CommandContext, CommandState, TestKind, WordEnd};
pub use glob::glob_scan;
pub use heredoc::{Announce, BodyStart, Collect, HereDoc, HereDocPhase, HERE_DELIM_MAX};
pub use number::{NumberBase, NumberLiteral, NumberStep};
pub use quote::{PairStep, QuoteKind, QuotePair, QuoteStack, QuoteStep, QUOTE_STACK_MAX};
pub use style::Style;
pub use window::{ByteWindow, SliceWindow};
pub use word_list::{KeywordLists, WordList};
