use super::*;

#[test]
fn splits_on_whitespace() {
    let list = WordList::from_words("if  then\n\tfi");
    assert_eq!(list.len(), 3);
    assert!(list.contains(b"then"));
    assert!(!list.contains(b"the"));
}

#[test]
fn empty_list_contains_nothing() {
    let list = WordList::new();
    assert!(list.is_empty());
    assert!(!list.contains(b""));
}

#[test]
fn default_delimiters() {
    let lists = KeywordLists::default();
    for d in ["|", "||", "|&", "&", "&&", ";", ";;", "(", ")", "{", "}"] {
        assert!(lists.delimiters.contains(d.as_bytes()), "{d}");
    }
    assert!(!lists.delimiters.contains(b">"));
}

#[test]
fn default_keywords_cover_builtins() {
    let lists = KeywordLists::default();
    assert!(lists.keywords.contains(b"echo"));
    assert!(lists.keywords.contains(b"whoami"));
    assert!(lists.structural.contains(b"done"));
    assert!(lists.structural_in.contains(b"select"));
}

#[test]
fn custom_primary_list_keeps_structure() {
    let lists = KeywordLists::with_keywords("frob");
    assert!(lists.keywords.contains(b"frob"));
    assert!(!lists.keywords.contains(b"echo"));
    assert!(lists.structural.contains(b"if"));
}

#[test]
fn parses_from_str() {
    let list: WordList = "a b".parse().unwrap_or_default();
    assert_eq!(list.len(), 2);
}
