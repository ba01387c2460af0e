use super::*;
use crate::TextDocument;
use pretty_assertions::assert_eq;

#[test]
fn tracks_lines() {
    let mut doc = TextDocument::new("ab\ncd");
    let mut sc = StyleCursor::new(&mut doc, 0, Style::Default);
    assert!(sc.at_line_start());
    assert!(!sc.at_line_end());
    sc.forward_n(2);
    assert_eq!(sc.ch(), b'\n');
    assert!(sc.at_line_end());
    sc.forward();
    assert!(sc.at_line_start());
    assert_eq!(sc.line(), 1);
    assert_eq!(sc.prev(), b'\n');
    sc.forward_n(2);
    // virtual position past the last byte ends the last line
    assert_eq!(sc.pos(), 5);
    assert_eq!(sc.ch(), 0);
    assert!(sc.at_line_end());
    assert!(sc.more());
    sc.forward();
    assert!(!sc.more());
}

#[test]
fn prev_is_read_from_document() {
    let mut doc = TextDocument::new("a\nb");
    let sc = StyleCursor::new(&mut doc, 2, Style::Default);
    assert_eq!(sc.prev(), b'\n');
    assert_eq!(sc.relative(-2), b'a');
    assert_eq!(sc.line(), 1);
}

#[test]
fn segments_are_committed() {
    let mut doc = TextDocument::new("echo hi");
    {
        let mut sc = StyleCursor::new(&mut doc, 0, Style::Word);
        sc.forward_n(4);
        assert_eq!(sc.length_current(), 4);
        assert_eq!(sc.copy_current::<8>().as_bytes(), b"echo");
        sc.set_state(Style::Default);
        sc.forward();
        sc.set_state(Style::Identifier);
        sc.forward_n(10);
        sc.complete();
    }
    assert_eq!(doc.styles(), &[4, 4, 4, 4, 0, 8, 8]);
}

#[test]
fn change_state_restyles_open_segment() {
    let mut doc = TextDocument::new("if");
    {
        let mut sc = StyleCursor::new(&mut doc, 0, Style::Word);
        sc.forward_n(2);
        sc.change_state(Style::Identifier);
        sc.set_state(Style::Default);
    }
    assert_eq!(doc.style_at(0), Style::Identifier);
    assert_eq!(doc.style_at(1), Style::Identifier);
}

#[test]
fn copy_truncates() {
    let mut doc = TextDocument::new("abcdef");
    let mut sc = StyleCursor::new(&mut doc, 0, Style::Default);
    sc.forward_n(6);
    assert_eq!(sc.copy_current::<3>().as_bytes(), b"abc");
}

#[test]
fn crlf_keeps_carriage_return_in_line() {
    let mut doc = TextDocument::new("a\r\nb");
    let mut sc = StyleCursor::new(&mut doc, 0, Style::Default);
    sc.forward();
    assert_eq!(sc.ch(), b'\r');
    assert!(!sc.at_line_end());
    sc.forward();
    assert!(sc.at_line_end());
}

#[test]
fn matches_through_window() {
    let mut doc = TextDocument::new("x <<-EOF");
    let mut sc = StyleCursor::new(&mut doc, 0, Style::Default);
    sc.forward_n(2);
    assert!(sc.matches(b"<<-"));
    assert!(!sc.matches(b"<<<"));
}
