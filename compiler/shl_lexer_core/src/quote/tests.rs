use super::*;
use pretty_assertions::assert_eq;

/// Drive a stack over `text` (which starts just after the opener) and return
/// the offset of the byte that closed the outermost frame.
fn close_offset(open: u8, kind: QuoteKind, text: &[u8]) -> Option<usize> {
    let mut stack = QuoteStack::new();
    stack.start(open, kind);
    let mut i = 0;
    while i < text.len() {
        let next = text.get(i + 1).copied().unwrap_or(0);
        match stack.step(text[i], next) {
            QuoteStep::Close => return Some(i),
            QuoteStep::Advance => i += 2,
            QuoteStep::Continue => i += 1,
        }
    }
    None
}

#[test]
fn plain_string_closes() {
    assert_eq!(close_offset(b'"', QuoteKind::String, b"abc\" x"), Some(3));
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(close_offset(b'"', QuoteKind::String, br#"a\"b" "#), Some(4));
}

#[test]
fn command_substitution_inside_string() {
    // "$(echo ")")" : the inner quotes belong to the substitution
    assert_eq!(
        close_offset(b'"', QuoteKind::String, br#"$(echo ")")" x"#),
        Some(11)
    );
}

#[test]
fn single_quote_not_nested_in_string() {
    assert_eq!(close_offset(b'"', QuoteKind::String, b"it's\""), Some(4));
}

#[test]
fn literal_in_command_has_no_escapes() {
    // $(echo '\') : the backslash inside '' is literal
    assert_eq!(
        close_offset(b'(', QuoteKind::Command, br"echo '\') "),
        Some(8)
    );
}

#[test]
fn nested_parens_in_command() {
    assert_eq!(close_offset(b'(', QuoteKind::Command, b"(a) b) "), Some(5));
}

#[test]
fn dollar_forms_push_frames() {
    let mut stack = QuoteStack::new();
    stack.start(b'(', QuoteKind::Command);
    assert_eq!(stack.step(b'$', b'\''), QuoteStep::Advance);
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.current().kind, QuoteKind::CString);
    assert_eq!(stack.step(b'\'', 0), QuoteStep::Continue);
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.step(b'$', b'"'), QuoteStep::Advance);
    assert_eq!(stack.current().kind, QuoteKind::LocaleString);
}

#[test]
fn push_beyond_capacity_is_dropped() {
    let mut stack = QuoteStack::new();
    stack.start(b'`', QuoteKind::Backtick);
    for _ in 0..QUOTE_STACK_MAX + 3 {
        stack.push(b'(', QuoteKind::Command);
    }
    assert_eq!(stack.depth(), QUOTE_STACK_MAX);
    for _ in 0..QUOTE_STACK_MAX + 3 {
        stack.pop();
    }
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.current().kind, QuoteKind::Backtick);
}

#[test]
fn start_discards_nesting() {
    let mut stack = QuoteStack::new();
    stack.start(b'"', QuoteKind::String);
    stack.push(b'`', QuoteKind::Backtick);
    stack.start(b'"', QuoteKind::String);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn pair_counts_braces() {
    let mut pair = QuotePair::default();
    pair.start(b'{');
    assert_eq!(pair.step(b'{', true), PairStep::Continue);
    assert_eq!(pair.step(b'}', true), PairStep::Continue);
    assert_eq!(pair.step(b'\\', true), PairStep::SkipNext);
    assert_eq!(pair.step(b'}', true), PairStep::Close);
}

#[test]
fn single_quote_pair_ignores_backslash() {
    let mut pair = QuotePair::default();
    pair.start(b'\'');
    assert_eq!(pair.step(b'\\', false), PairStep::Continue);
    assert_eq!(pair.step(b'\'', false), PairStep::Close);
}

#[test]
fn closing_pairs() {
    assert_eq!(closing_of(b'('), b')');
    assert_eq!(closing_of(b'<'), b'>');
    assert_eq!(closing_of(b'"'), b'"');
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_quote {
    use super::super::{QuoteKind, QuoteStack, QUOTE_STACK_MAX};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn depth_never_exceeds_capacity(bytes in proptest::collection::vec(
            prop::sample::select(b"$(\"'`)\\x".to_vec()), 0..200)) {
            let mut stack = QuoteStack::new();
            stack.start(b'(', QuoteKind::Command);
            for pair in bytes.windows(2) {
                let _ = stack.step(pair[0], pair[1]);
                prop_assert!(stack.depth() <= QUOTE_STACK_MAX);
            }
        }
    }
}
