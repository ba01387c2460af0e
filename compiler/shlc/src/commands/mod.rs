//! Command handlers for the `shl` CLI.
//!
//! Every command loads the file into a [`TextDocument`], colours it in one
//! pass and prints some view of the result. Shared loading lives here.

use shl_lexer::{
    BashLexer, ConfigError, KeywordLists, LexerOptions, PropertySet, TextDocument,
};
use thiserror::Error;

mod check;
mod fold;
mod lex;

pub use check::check_file;
pub use fold::fold_file;
pub use lex::{lex_file, runs_file};

/// Bad command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument `{0}`")]
    Unexpected(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// A parsed command line, minus the command name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub path: String,
    pub props: Option<String>,
    pub keywords: Option<String>,
}

/// Parse the arguments following the command name.
pub fn parse_options(args: &[String]) -> Result<Invocation, UsageError> {
    let mut path = None;
    let mut invocation = Invocation::default();
    for arg in args {
        if let Some(file) = arg.strip_prefix("--props=") {
            invocation.props = Some(file.to_string());
        } else if let Some(list) = arg.strip_prefix("--keywords=") {
            invocation.keywords = Some(list.to_string());
        } else if arg.starts_with("--") {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(UsageError::Unexpected(arg.clone()));
        }
    }
    invocation.path = path.ok_or(UsageError::MissingPath)?;
    Ok(invocation)
}

/// Read a file, exiting with a message on failure.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Parse property text and check the values the lexer reads.
fn parse_properties(text: &str) -> Result<PropertySet, ConfigError> {
    let props = PropertySet::parse(text)?;
    LexerOptions::from_properties(&props)?;
    Ok(props)
}

fn load_properties(path: &str) -> PropertySet {
    let text = read_file(path);
    match parse_properties(&text) {
        Ok(props) => props,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

/// The lexer for `invocation`, using `--keywords=` when given.
fn lexer_for(invocation: &Invocation) -> BashLexer {
    let lists = match &invocation.keywords {
        Some(list) => KeywordLists::with_keywords(list),
        None => KeywordLists::default(),
    };
    let lexer = BashLexer::new(lists);
    tracing::debug!(
        keywords = lexer.keyword_lists().keywords.len(),
        "keyword list loaded"
    );
    lexer
}

/// Build the lexer and document for `invocation`, then colour the whole file.
fn colourised(invocation: &Invocation) -> TextDocument {
    let lexer = lexer_for(invocation);
    let props = invocation
        .props
        .as_deref()
        .map(load_properties)
        .unwrap_or_default();
    let content = read_file(&invocation.path);
    let mut doc = TextDocument::new(content).with_properties(props);
    lexer.colourise_all(&mut doc);
    doc
}

/// Text of `range` for display. Ranges from the style table may split a
/// multi-byte character.
fn display_text(doc: &TextDocument, range: std::ops::Range<usize>) -> String {
    String::from_utf8_lossy(&doc.text().as_bytes()[range]).into_owned()
}

#[cfg(test)]
mod tests;
