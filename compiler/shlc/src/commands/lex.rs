//! The `lex` and `runs` commands.

use std::fmt::Write as _;

use shl_lexer::{CommandState, Document, Style, TextDocument};

use super::{colourised, display_text, Invocation};

/// One line of the `lex` view: runs of the line as `style"text"` pairs.
pub(super) fn render_line(doc: &TextDocument, line: usize) -> String {
    let start = doc.line_start(line);
    let end = doc.line_start(line + 1);
    let mut out = String::new();
    let mut run_start = start;
    while run_start < end {
        let style = doc.style_at(run_start);
        let mut run_end = run_start + 1;
        while run_end < end && doc.style_at(run_end) == style {
            run_end += 1;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "{style}{:?}", display_text(doc, run_start..run_end));
        run_start = run_end;
    }
    out
}

/// Print every line with its recorded command state and its style runs.
pub fn lex_file(invocation: &Invocation) {
    let doc = colourised(invocation);
    println!(
        "Styles for '{}' ({} bytes, {} lines):",
        invocation.path,
        doc.len(),
        doc.line_count()
    );
    for line in 0..doc.line_count() {
        let state = CommandState::from_u8(doc.line_state(line));
        println!(
            "{:>5} {:<5} | {}",
            line + 1,
            format!("{state:?}"),
            render_line(&doc, line)
        );
    }
}

/// Print style runs as byte ranges, skipping default-styled whitespace.
pub fn runs_file(invocation: &Invocation) {
    let doc = colourised(invocation);
    let runs = doc.style_runs();
    println!("Runs for '{}' ({} runs):", invocation.path, runs.len());
    for (range, style) in runs {
        let text = display_text(&doc, range.clone());
        if style == Style::Default && text.trim().is_empty() {
            continue;
        }
        println!(
            "  {:>6}..{:<6} {:<11} {:?}",
            range.start, range.end, style.name(), text
        );
    }
}
