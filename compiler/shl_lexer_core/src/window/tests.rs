use super::*;

#[test]
fn reads_around_position() {
    let w = SliceWindow::new(b"abc", 1);
    assert_eq!(w.prev(), b'a');
    assert_eq!(w.ch(), b'b');
    assert_eq!(w.next(), b'c');
    assert_eq!(w.relative(2), 0);
}

#[test]
fn reads_before_start_are_zero() {
    let w = SliceWindow::new(b"abc", 0);
    assert_eq!(w.prev(), 0);
    assert_eq!(w.relative(-5), 0);
}

#[test]
fn advance_moves_forward() {
    let mut w = SliceWindow::new(b"<<-", 0);
    w.advance();
    assert_eq!(w.pos(), 1);
    assert_eq!(w.ch(), b'<');
    assert_eq!(w.next(), b'-');
}

#[test]
fn matches_pattern() {
    let w = SliceWindow::new(b"x ##^A", 2);
    assert!(w.matches(b"##^"));
    assert!(!w.matches(b"###"));
    assert!(!w.matches(b"##^AB"));
}
