use super::*;
use crate::TextDocument;

fn doc_with_states(text: &str, states: &[CommandState]) -> TextDocument {
    let mut doc = TextDocument::new(text);
    for (line, state) in states.iter().enumerate() {
        doc.set_line_state(line, state.as_u8());
    }
    doc
}

#[test]
fn stops_at_start_line() {
    use CommandState::{Body, Start};
    let doc = doc_with_states("a\nb\nc\nd", &[Start, Start, Body, Body]);
    assert_eq!(restart_line(&doc, 7), 1);
    assert_eq!(restart_offset(&doc, 7), 2);
}

#[test]
fn line_start_edit_backs_up_one_line() {
    use CommandState::Start;
    let doc = doc_with_states("a\nb\nc", &[Start, Start, Start]);
    assert_eq!(restart_line(&doc, 4), 1);
    assert_eq!(restart_line(&doc, 5), 2);
}

#[test]
fn falls_back_to_first_line() {
    use CommandState::Body;
    let doc = doc_with_states("a\nb\nc", &[Body, Body, Body]);
    assert_eq!(restart_line(&doc, 5), 0);
}

#[test]
fn unknown_states_are_not_restart_points() {
    let mut doc = TextDocument::new("a\nb\nc");
    doc.set_line_state(2, 77);
    assert_eq!(restart_line(&doc, 5), 0);
}

#[test]
fn position_past_end_is_clamped() {
    use CommandState::{Body, Start};
    let doc = doc_with_states("a\nb", &[Body, Start]);
    assert_eq!(restart_line(&doc, 99), 1);
}
