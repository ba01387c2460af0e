use super::*;

#[test]
fn word_start_is_alpha_or_underscore() {
    assert!(is_word_start(b'a'));
    assert!(is_word_start(b'Z'));
    assert!(is_word_start(b'_'));
    assert!(!is_word_start(b'1'));
    assert!(!is_word_start(b'-'));
    assert!(!is_word_start(0xC3));
}

#[test]
fn word_body_accepts_file_name_punctuation() {
    for b in *b"az09._+-" {
        assert!(is_word(b), "{:?} should be a word byte", b as char);
    }
    for b in *b" /=;$\"'" {
        assert!(!is_word(b), "{:?} should not be a word byte", b as char);
    }
}

#[test]
fn meta_includes_nul_and_blanks() {
    for b in *b"|&;()<> \t\r\n\0" {
        assert!(is_meta(b), "{b:#04x} should be meta");
    }
    assert!(!is_meta(b'#'));
    assert!(!is_meta(b'a'));
}

#[test]
fn operator_set() {
    for b in *b"^&%()-+=|{}[]:;>,*<?!.~@" {
        assert!(is_operator(b), "{:?} should be an operator", b as char);
    }
    assert!(!is_operator(b'#'));
    assert!(!is_operator(b'$'));
    assert!(!is_operator(b'/'));
}

#[test]
fn heredoc_sets_differ_on_digits_and_backslash() {
    assert!(!is_heredoc_start(b'1'));
    assert!(is_heredoc(b'1'));
    assert!(is_heredoc_start(b'\\'));
    assert!(!is_heredoc(b'\\'));
    assert!(is_heredoc(b'='));
    assert!(!is_heredoc_start(b'='));
}

#[test]
fn left_shift_is_digits_and_dollar() {
    assert!(is_left_shift(b'$'));
    assert!(is_left_shift(b'7'));
    assert!(!is_left_shift(b'E'));
}

#[test]
fn space_covers_ascii_whitespace_controls() {
    for b in [b' ', b'\t', b'\n', 0x0b, 0x0c, b'\r'] {
        assert!(is_space(b));
    }
    assert!(!is_space(0));
    assert!(!is_space(b'x'));
}

#[test]
fn high_bytes_have_no_class() {
    for b in 0x80..=0xFFu8 {
        assert_eq!(classify(b), CharClass::empty());
    }
}

#[test]
fn file_test_letters() {
    for b in *b"rwxoRWXOezsfdlpSbctugkTBMACahGLNn" {
        assert!(is_file_test(b));
    }
    assert!(!is_file_test(b'q'));
    assert!(!is_file_test(b'1'));
}
