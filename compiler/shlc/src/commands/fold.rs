//! The `fold` command.

use shl_lexer::{Document, FoldLevel};

use super::{colourised, Invocation};

/// Two-character flag column: `+` for fold headers, `w` for blank lines.
pub(super) fn flag_column(level: FoldLevel) -> &'static str {
    match (level.is_header(), level.is_white()) {
        (true, true) => "+w",
        (true, false) => "+ ",
        (false, true) => " w",
        (false, false) => "  ",
    }
}

/// Print the fold depth and flags of every line next to its text.
pub fn fold_file(invocation: &Invocation) {
    let doc = colourised(invocation);
    println!("Folds for '{}':", invocation.path);
    for (line, level) in doc.fold_levels().iter().enumerate() {
        if line + 1 == doc.line_count() && doc.line_text(line).is_empty() {
            // the empty line after a trailing newline
            break;
        }
        println!(
            "{:>5} {:>3} {} | {}",
            line + 1,
            level.depth(),
            flag_column(*level),
            doc.line_text(line)
        );
    }
}
