//! The `check` command: report bytes the lexer styled as errors.

use std::fmt;

use shl_lexer::{Document, Style, TextDocument};

use super::{colourised, display_text, Invocation};

/// An error-styled run, positioned for display (1-based line and column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct LexError {
    pub line: usize,
    pub column: usize,
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: invalid {:?}", self.line, self.column, self.text)
    }
}

/// Every maximal run styled [`Style::Error`].
pub(super) fn error_runs(doc: &TextDocument) -> Vec<LexError> {
    doc.style_runs()
        .into_iter()
        .filter(|(_, style)| *style == Style::Error)
        .map(|(range, _)| {
            let line = doc.line_of_offset(range.start);
            LexError {
                line: line + 1,
                column: range.start - doc.line_start(line) + 1,
                text: display_text(doc, range),
            }
        })
        .collect()
}

/// Lex a file and list its error-styled runs. Exits with status 1 if there
/// are any.
pub fn check_file(invocation: &Invocation) {
    let doc = colourised(invocation);
    let errors = error_runs(&doc);
    for error in &errors {
        eprintln!("{}:{error}", invocation.path);
    }
    if !errors.is_empty() {
        eprintln!(
            "{}: {} lexical error{}",
            invocation.path,
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }
    println!("{}: ok", invocation.path);
}
