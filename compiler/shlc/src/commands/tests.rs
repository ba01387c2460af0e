use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn coloured(text: &str) -> TextDocument {
    let mut doc = TextDocument::new(text);
    BashLexer::default().colourise_all(&mut doc);
    doc
}

#[test]
fn options_in_any_order() {
    let parsed = parse_options(&args(&["--keywords=ls cat", "x.sh", "--props=p"]));
    assert_eq!(
        parsed,
        Ok(Invocation {
            path: "x.sh".to_string(),
            props: Some("p".to_string()),
            keywords: Some("ls cat".to_string()),
        })
    );
}

#[test]
fn usage_errors() {
    assert_eq!(parse_options(&[]), Err(UsageError::MissingPath));
    assert_eq!(
        parse_options(&args(&["a.sh", "b.sh"])),
        Err(UsageError::Unexpected("b.sh".to_string()))
    );
    assert_eq!(
        parse_options(&args(&["--verbose", "a.sh"])),
        Err(UsageError::UnknownOption("--verbose".to_string()))
    );
}

#[test]
fn properties_are_validated() {
    assert!(parse_properties("fold.comment=1\nfold.compact=0").is_ok());
    assert_eq!(
        parse_properties("fold.comment=yes"),
        Err(ConfigError::NotAnInteger {
            key: "fold.comment".to_string(),
            value: "yes".to_string(),
        })
    );
    assert_eq!(
        parse_properties("fold.comment"),
        Err(ConfigError::MissingEquals { line: 1 })
    );
}

#[test]
fn keywords_option_replaces_the_primary_list() {
    let custom = lexer_for(&Invocation {
        keywords: Some("ls cat".to_string()),
        ..Invocation::default()
    });
    let lists = custom.keyword_lists();
    assert_eq!(lists.keywords.len(), 2);
    assert!(lists.keywords.contains(b"cat"));
    assert!(!lists.keywords.contains(b"echo"));
    assert!(lists.structural.contains(b"if"));

    let default = lexer_for(&Invocation::default());
    assert!(default.keyword_lists().keywords.contains(b"echo"));
}

#[test]
fn lex_view_of_a_line() {
    let doc = coloured("echo $x # hi\n");
    assert_eq!(
        lex::render_line(&doc, 0),
        r##"word"echo" default" " scalar"$x" default" " comment"# hi" default"\n""##
    );
}

#[test]
fn fold_flags() {
    use shl_lexer::{FoldFlags, FoldLevel};
    let header = FoldLevel::new(FoldLevel::BASE, FoldFlags::HEADER);
    assert_eq!(fold::flag_column(header), "+ ");
    assert_eq!(fold::flag_column(FoldLevel::default()), "  ");
}

#[test]
fn error_positions() {
    let doc = coloured("echo ok\necho 99#0\n");
    let errors = check::error_runs(&doc);
    assert_eq!(
        errors,
        vec![check::LexError {
            line: 2,
            column: 6,
            text: "99".to_string(),
        }]
    );
    assert_eq!(errors[0].to_string(), "2:6: invalid \"99\"");
}

#[test]
fn clean_file_has_no_errors() {
    let doc = coloured("if [ -f x ]; then cat x; fi\n");
    assert!(check::error_runs(&doc).is_empty());
}
