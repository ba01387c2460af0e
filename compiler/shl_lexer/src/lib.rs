//! Incremental, resumable shell lexer.
//!
//! The lexer colours a [`Document`] in place: one style byte per text byte,
//! one command-state byte per line, one fold level per line. Passes are
//! resumable. After an edit, [`restart_line`] finds a line whose recorded
//! state is a clean command start, lexing resumes there, and it stops as soon
//! as the recorded states below the edit agree with the new ones.
//!
//! ```text
//! TextDocument::replace ──► TextChange ──► BashLexer::apply_change
//!                                            ├─ restart_line
//!                                            ├─ lex  (styles + line states)
//!                                            └─ fold (fold levels)
//! ```
//!
//! The per-byte state machines live in `shl_lexer_core`; this crate drives
//! them over a document.

mod cursor;
mod document;
mod fold;
mod incremental;
mod lexer;
mod properties;
mod restart;
mod text_document;

pub use cursor::StyleCursor;
pub use document::Document;
pub use fold::{fold, FoldFlags, FoldLevel, FoldReport};
pub use incremental::TextChange;
pub use lexer::{BashLexer, LexReport};
pub use properties::{
    ConfigError, LexerOptions, PropertySet, CSH_LANGUAGE, FOLD_COMMENT, FOLD_COMPACT,
};
pub use restart::{restart_line, restart_offset};
pub use text_document::{EditError, TextDocument};

pub use shl_lexer_core::{CommandState, KeywordLists, Style, WordList};
