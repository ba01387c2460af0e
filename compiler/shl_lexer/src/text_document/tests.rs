use super::*;
use pretty_assertions::assert_eq;

#[test]
fn line_table() {
    let doc = TextDocument::new("a\nbc\n\nd");
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.line_start(1), 2);
    assert_eq!(doc.line_start(3), 6);
    assert_eq!(doc.line_start(9), 7);
    assert_eq!(doc.line_of_offset(0), 0);
    assert_eq!(doc.line_of_offset(1), 0);
    assert_eq!(doc.line_of_offset(2), 1);
    assert_eq!(doc.line_of_offset(5), 2);
    assert_eq!(doc.line_of_offset(100), 3);
    assert_eq!(doc.line_text(1), "bc");
}

#[test]
fn trailing_newline_adds_empty_line() {
    let doc = TextDocument::new("x\n");
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line_start(1), 2);
    assert_eq!(doc.line_text(1), "");
}

#[test]
fn empty_document_has_one_line() {
    let doc = TextDocument::new("");
    assert_eq!(doc.line_count(), 1);
    assert!(doc.is_empty());
    assert_eq!(doc.byte_at(0), 0);
}

#[test]
fn insert_shifts_lines() {
    let mut doc = TextDocument::new("a\nb\nc");
    doc.set_line_state(1, 1);
    doc.set_line_state(2, 1);
    let change = doc.insert(2, "x\ny\n");
    assert_eq!(change, Ok(TextChange::insert(2, 4)));
    assert_eq!(doc.text(), "a\nx\ny\nb\nc");
    assert_eq!(doc.line_count(), 5);
    assert_eq!(doc.line_start(3), 6);
    assert_eq!(doc.line_states(), &[0, 1, 0, 0, 1]);
}

#[test]
fn delete_joins_lines() {
    let mut doc = TextDocument::new("ab\ncd\nef");
    doc.set_line_state(2, 1);
    doc.delete(1..4).ok();
    assert_eq!(doc.text(), "ad\nef");
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line_start(1), 3);
    assert_eq!(doc.line_states(), &[0, 1]);
}

#[test]
fn replace_splices_styles() {
    let mut doc = TextDocument::new("abcd");
    doc.set_style_range(0..4, Style::Word);
    doc.replace(1..3, "XYZ").ok();
    assert_eq!(doc.text(), "aXYZd");
    assert_eq!(doc.style_at(0), Style::Word);
    assert_eq!(doc.style_at(1), Style::Default);
    assert_eq!(doc.style_at(3), Style::Default);
    assert_eq!(doc.style_at(4), Style::Word);
}

#[test]
fn invalid_edits_are_rejected() {
    let mut doc = TextDocument::new("h\u{e9}llo");
    assert_eq!(
        doc.insert(10, "x"),
        Err(EditError::OutOfBounds {
            start: 10,
            end: 10,
            len: 6
        })
    );
    assert_eq!(
        doc.delete(3..1),
        Err(EditError::Reversed { start: 3, end: 1 })
    );
    assert_eq!(
        doc.insert(2, "x"),
        Err(EditError::NotCharBoundary { offset: 2 })
    );
    assert_eq!(doc.text(), "h\u{e9}llo");
}

#[test]
fn style_range_is_clamped() {
    let mut doc = TextDocument::new("abc");
    doc.set_style_range(1..10, Style::Number);
    assert_eq!(doc.styles(), &[0, 3, 3]);
}

#[test]
fn runs_merge_equal_styles() {
    let mut doc = TextDocument::new("ab cd");
    doc.set_style_range(0..2, Style::Word);
    doc.set_style_range(3..5, Style::Identifier);
    assert_eq!(
        doc.style_runs(),
        vec![
            (0..2, Style::Word),
            (2..3, Style::Default),
            (3..5, Style::Identifier)
        ]
    );
}

#[test]
fn set_line_state_returns_previous() {
    let mut doc = TextDocument::new("a\nb");
    assert_eq!(doc.set_line_state(1, 4), 0);
    assert_eq!(doc.set_line_state(1, 1), 4);
    assert_eq!(doc.set_line_state(7, 1), 0);
}

#[test]
fn properties_reach_document() {
    let mut props = PropertySet::new();
    props.set("fold.compact", "0");
    let doc = TextDocument::new("").with_properties(props);
    assert_eq!(doc.property_int("fold.compact", 1), 0);
    assert_eq!(doc.property_int("fold.comment", 0), 0);
}
