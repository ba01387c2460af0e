//! Style ids written to the document, one per byte.
//!
//! The discriminants are a stable wire format: hosts persist style bytes and
//! map them to colours at display time, so values must never be renumbered.

/// Style classification for a single byte of the document.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Whitespace and anything not otherwise classified.
    #[default]
    Default = 0,
    /// Malformed input: bad numerals, broken here-document delimiters.
    Error = 1,
    /// `#` line comment (and m4 `dnl`).
    CommentLine = 2,
    /// Numeric literal.
    Number = 3,
    /// Reserved word or file-test operator.
    Word = 4,
    /// Double-quoted, C-string or locale string, including nested substitutions.
    String = 5,
    /// Single-quoted literal string.
    Character = 6,
    /// Operator and command delimiter.
    Operator = 7,
    /// Plain word: command names, arguments, file names.
    Identifier = 8,
    /// `$name` parameter reference.
    Scalar = 9,
    /// `${...}` parameter expansion.
    Param = 10,
    /// Backtick or `$(...)` command substitution.
    Backticks = 11,
    /// `<<WORD` here-document operator and delimiter.
    HereDelim = 12,
    /// Here-document body.
    HereQ = 13,
}

impl Style {
    /// Number of distinct styles.
    pub const COUNT: usize = 14;

    /// All styles in discriminant order.
    pub const ALL: [Style; Self::COUNT] = [
        Style::Default,
        Style::Error,
        Style::CommentLine,
        Style::Number,
        Style::Word,
        Style::String,
        Style::Character,
        Style::Operator,
        Style::Identifier,
        Style::Scalar,
        Style::Param,
        Style::Backticks,
        Style::HereDelim,
        Style::HereQ,
    ];

    /// Decode a stored style byte. Unknown values decode as `Default`.
    #[inline]
    pub const fn from_u8(byte: u8) -> Self {
        if (byte as usize) < Self::COUNT {
            Self::ALL[byte as usize]
        } else {
            Style::Default
        }
    }

    /// The stored byte for this style.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Short lowercase name, used by diagnostics and the CLI dump.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Error => "error",
            Style::CommentLine => "comment",
            Style::Number => "number",
            Style::Word => "word",
            Style::String => "string",
            Style::Character => "character",
            Style::Operator => "operator",
            Style::Identifier => "identifier",
            Style::Scalar => "scalar",
            Style::Param => "param",
            Style::Backticks => "backticks",
            Style::HereDelim => "here-delim",
            Style::HereQ => "here-body",
        }
    }

    /// Styles that may legitimately continue onto the next physical line.
    ///
    /// A line that starts inside one of these is never a restart point.
    #[inline]
    pub const fn spans_lines(self) -> bool {
        matches!(
            self,
            Style::String
                | Style::Backticks
                | Style::Character
                | Style::HereQ
                | Style::CommentLine
                | Style::Param
        )
    }
}

impl From<Style> for u8 {
    fn from(style: Style) -> u8 {
        style.as_u8()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
