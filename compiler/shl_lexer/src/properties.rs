//! Lexer configuration.
//!
//! Editors hand lexers a flat string map of properties, usually loaded from
//! SciTE-style `.properties` text:
//!
//! ```text
//! # fold settings
//! fold.comment=1
//! fold.compact=0
//! lexer.bash.csh.language=\
//!     0
//! ```
//!
//! A trailing `\` joins the next line onto the current one.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::document::Document;

/// Fold consecutive comment lines into one block.
pub const FOLD_COMMENT: &str = "fold.comment";
/// Mark blank lines with the whitespace flag.
pub const FOLD_COMPACT: &str = "fold.compact";
/// Use csh fold keywords.
pub const CSH_LANGUAGE: &str = "lexer.bash.csh.language";

/// Malformed property text or value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("line {line}: expected `key=value`")]
    MissingEquals { line: usize },
    #[error("line {line}: empty property name")]
    EmptyKey { line: usize },
    #[error("property `{key}` is not an integer: `{value}`")]
    NotAnInteger { key: String, value: String },
}

/// String-keyed property map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertySet {
    values: FxHashMap<String, String>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse property text. Later definitions override earlier ones.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut set = PropertySet::new();
        let mut logical = String::new();
        let mut first_line = 0;
        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            if logical.is_empty() {
                first_line = line_no;
                let trimmed = raw.trim_start();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
            }
            if let Some(head) = raw.strip_suffix('\\') {
                logical.push_str(if logical.is_empty() { head } else { head.trim_start() });
                continue;
            }
            logical.push_str(if logical.is_empty() { raw } else { raw.trim_start() });
            set.insert_line(&logical, first_line)?;
            logical.clear();
        }
        if !logical.is_empty() {
            set.insert_line(&logical, first_line)?;
        }
        tracing::debug!(count = set.values.len(), "parsed properties");
        Ok(set)
    }

    fn insert_line(&mut self, line: &str, line_no: usize) -> Result<(), ConfigError> {
        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::MissingEquals { line: line_no });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyKey { line: line_no });
        }
        self.set(key, value.trim());
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Integer value of `key`, `None` when unset.
    pub fn int(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::NotAnInteger {
                key: key.to_owned(),
                value: value.to_owned(),
            })
    }

    /// Integer value of `key`, falling back to `default` when unset or invalid.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.int(key).ok().flatten().unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Options consulted by the fold pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    pub fold_comment: bool,
    pub fold_compact: bool,
    pub csh: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            fold_comment: false,
            fold_compact: true,
            csh: false,
        }
    }
}

impl LexerOptions {
    /// Read options through a document's property lookup. Invalid values
    /// fall back to their defaults.
    pub fn from_document<D: Document + ?Sized>(doc: &D) -> Self {
        LexerOptions {
            fold_comment: doc.property_int(FOLD_COMMENT, 0) != 0,
            fold_compact: doc.property_int(FOLD_COMPACT, 1) != 0,
            csh: doc.property_int(CSH_LANGUAGE, 0) != 0,
        }
    }

    /// Strict variant of [`from_document`](Self::from_document) that reports
    /// the first invalid value.
    pub fn from_properties(props: &PropertySet) -> Result<Self, ConfigError> {
        Ok(LexerOptions {
            fold_comment: props.int(FOLD_COMMENT)?.unwrap_or(0) != 0,
            fold_compact: props.int(FOLD_COMPACT)?.unwrap_or(1) != 0,
            csh: props.int(CSH_LANGUAGE)?.unwrap_or(0) != 0,
        })
    }
}
