//! Keyword lists.
//!
//! Lists are built once from whitespace-separated text (the format editors
//! use for keyword properties) and only queried afterwards.

use rustc_hash::FxHashSet;

/// Command delimiters. Two-byte entries are matched before one-byte ones.
pub const DEFAULT_DELIMITERS: &str = "| || |& & && ; ;; ( ) { }";

/// Keywords that keep the command in `Start` position.
pub const DEFAULT_STRUCTURAL: &str = "if elif fi while until else then do done esac eval";

/// Keywords that open a header closed by `in` or `do`.
pub const DEFAULT_STRUCTURAL_IN: &str = "for case select";

/// Builtins, reserved words and common utilities styled as keywords in
/// command position.
pub const DEFAULT_KEYWORDS: &str = "\
alias ar asa awk banner basename bash bc bdiff break \
bunzip2 bzip2 cal calendar case cat cc cd chmod cksum \
clear cmp col comm compress continue cp cpio crypt \
csplit ctags cut date dc dd declare deroff dev df diff diff3 \
dircmp dirname do done du echo ed egrep elif else env \
esac eval ex exec exit expand export expr false fc \
fgrep fi file find fmt fold for function functions \
getconf getopt getopts grep gres hash head help \
history iconv id if in integer jobs join kill local lc \
let line ln logname look ls m4 mail mailx make \
man mkdir more mt mv newgrp nl nm nohup ntps od \
pack paste patch pathchk pax pcat perl pg pr print \
printf ps pwd read readonly red return rev rm rmdir \
sed select set sh shift size sleep sort spell \
split start stop strings strip stty sum suspend \
sync tail tar tee test then time times touch tr \
trap true tsort tty type typeset ulimit umask unalias \
uname uncompress unexpand uniq unpack unset until \
uudecode uuencode vi vim vpax wait wc whence which \
while who wpaste wstart xargs zcat \
chgrp chown chroot dir dircolors factor groups hostid install link \
md5sum mkfifo mknod nice pinky printenv ptx readlink seq \
sha1sum shred stat su tac unlink users vdir whoami yes";

/// Set of byte-string words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: FxHashSet<Box<[u8]>>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from whitespace-separated words.
    pub fn from_words(text: &str) -> Self {
        let words = text
            .split_ascii_whitespace()
            .map(|w| Box::from(w.as_bytes()))
            .collect();
        WordList { words }
    }

    #[inline]
    pub fn contains(&self, word: &[u8]) -> bool {
        !self.words.is_empty() && self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl std::str::FromStr for WordList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(WordList::from_words(s))
    }
}

/// All word lists the lexer consults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordLists {
    /// Keywords highlighted in command position.
    pub keywords: WordList,
    /// Structural keywords that keep `Start`.
    pub structural: WordList,
    /// Header keywords awaiting `in`/`do`.
    pub structural_in: WordList,
    pub delimiters: WordList,
}

impl KeywordLists {
    /// Default lists with a custom primary keyword list.
    pub fn with_keywords(keywords: &str) -> Self {
        KeywordLists {
            keywords: WordList::from_words(keywords),
            ..Self::default()
        }
    }
}

impl Default for KeywordLists {
    fn default() -> Self {
        KeywordLists {
            keywords: WordList::from_words(DEFAULT_KEYWORDS),
            structural: WordList::from_words(DEFAULT_STRUCTURAL),
            structural_in: WordList::from_words(DEFAULT_STRUCTURAL_IN),
            delimiters: WordList::from_words(DEFAULT_DELIMITERS),
        }
    }
}

#[cfg(test)]
mod tests;
