//! Restart-point resolution.
//!
//! After an edit, lexing must resume from a position where the lexer state
//! is known without looking further back. Every line records the command
//! state in effect at its first byte, and lines that start inside a token
//! spanning lines record `Body`. A line recorded as `Start` therefore begins
//! a fresh command in the default style, which is exactly the state a pass
//! starts in.

use shl_lexer_core::CommandState;

use crate::document::Document;

/// Line to restart lexing from for an edit at `pos`.
///
/// An edit at the very start of a line can change how the previous line
/// ends (a removed newline, a new continuation), so that line is never
/// trusted. Line 0 is always a valid restart point.
#[tracing::instrument(level = "debug", skip(doc), ret)]
pub fn restart_line<D: Document + ?Sized>(doc: &D, pos: usize) -> usize {
    let pos = pos.min(doc.len());
    let mut line = doc.line_of_offset(pos);
    if line > 0 && pos == doc.line_start(line) {
        line -= 1;
    }
    while line > 0 && CommandState::from_u8(doc.line_state(line)) != CommandState::Start {
        line -= 1;
    }
    line
}

/// Byte offset of [`restart_line`].
pub fn restart_offset<D: Document + ?Sized>(doc: &D, pos: usize) -> usize {
    doc.line_start(restart_line(doc, pos))
}

#[cfg(test)]
mod tests;
