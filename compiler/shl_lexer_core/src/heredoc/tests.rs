use super::*;
use pretty_assertions::assert_eq;

/// Collect a delimiter from `text`, which starts at the first delimiter byte.
/// Returns the outcome that stopped collection (or `Appended` at end).
fn collect_all(doc: &mut HereDoc, text: &[u8]) -> Collect {
    let mut prev = 0;
    for (i, &ch) in text.iter().enumerate() {
        let next = text.get(i + 1).copied().unwrap_or(0);
        match doc.collect(prev, ch, next) {
            Collect::Appended | Collect::Skipped => {}
            other => return other,
        }
        prev = ch;
    }
    Collect::Appended
}

#[test]
fn bare_delimiter() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    assert_eq!(doc.announce(b'E', CommandState::Body), Announce::Bare);
    assert!(doc.is_collecting());
    assert_eq!(collect_all(&mut doc, b"EOF\n"), Collect::Ended);
    assert_eq!(doc.delimiter(), b"EOF");
    assert_eq!(doc.end_of_line(false), BodyStart::Body);
    assert!(doc.terminates(b"EOF", 0));
    assert!(!doc.terminates(b"EOF ", 0));
    assert!(!doc.terminates(b"\tEOF", 0));
}

#[test]
fn single_quoted_delimiter_has_no_escapes() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    assert_eq!(doc.announce(b'\'', CommandState::Start), Announce::Quoted);
    assert_eq!(collect_all(&mut doc, br"E\ND'"), Collect::Closed);
    assert_eq!(doc.delimiter(), br"E\ND");
}

#[test]
fn double_quoted_escapes() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    assert_eq!(doc.announce(b'"', CommandState::Start), Announce::Quoted);
    assert_eq!(collect_all(&mut doc, br#"A\"B\x""#), Collect::Closed);
    assert_eq!(doc.delimiter(), br#"A"B\x"#);
}

#[test]
fn unterminated_quote_is_error() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    doc.announce(b'\'', CommandState::Start);
    collect_all(&mut doc, b"EOF");
    assert_eq!(doc.end_of_line(true), BodyStart::Error);
}

#[test]
fn zero_length_unquoted_is_error() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    assert_eq!(doc.announce(b';', CommandState::Start), Announce::ZeroLength);
    assert_eq!(doc.collect(b'<', b';', 0), Collect::Ended);
    assert_eq!(doc.end_of_line(false), BodyStart::Error);
}

#[test]
fn empty_quoted_delimiter_closes_on_empty_line() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    doc.announce(b'\'', CommandState::Start);
    assert_eq!(collect_all(&mut doc, b"'"), Collect::Closed);
    assert_eq!(doc.end_of_line(false), BodyStart::Body);
    assert!(doc.terminates(b"", 0));
    assert!(!doc.terminates(b"", 1));
}

#[test]
fn tab_stripping() {
    let mut doc = HereDoc::new();
    doc.begin(true);
    doc.announce(b'E', CommandState::Start);
    collect_all(&mut doc, b"EOF ");
    assert!(doc.strips_tabs());
    assert!(doc.terminates(b"EOF", 2));

    let mut plain = HereDoc::new();
    plain.begin(false);
    plain.announce(b'E', CommandState::Start);
    collect_all(&mut plain, b"EOF ");
    assert!(!plain.terminates(b"EOF", 2));
}

#[test]
fn crlf_terminator() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    doc.announce(b'E', CommandState::Start);
    collect_all(&mut doc, b"END\r");
    assert_eq!(doc.delimiter(), b"END");
    assert!(doc.terminates(b"END\r", 0));
}

#[test]
fn announce_precedence() {
    let mut doc = HereDoc::new();
    assert_eq!(doc.announce(b'<', CommandState::Body), Announce::HereString);
    assert_eq!(doc.announce(b' ', CommandState::Body), Announce::Whitespace);
    assert_eq!(doc.announce(b'$', CommandState::Body), Announce::LeftShift);
    assert_eq!(doc.announce(b'2', CommandState::Arith), Announce::LeftShift);
    assert_eq!(doc.announce(b'=', CommandState::Arith), Announce::LeftShift);
    assert_eq!(doc.announce(b'=', CommandState::Body), Announce::Bare);
    assert_eq!(doc.announce(b'_', CommandState::Arith), Announce::Bare);
}

#[test]
fn overflow_resets_phase() {
    let mut doc = HereDoc::new();
    doc.begin(false);
    doc.announce(b'A', CommandState::Start);
    let long = vec![b'A'; HERE_DELIM_MAX + 1];
    assert_eq!(collect_all(&mut doc, &long), Collect::Overflow);
    assert_eq!(doc.phase(), HereDocPhase::Announced);
    assert_eq!(doc.delimiter().len(), HERE_DELIM_MAX);
}
