/// A single-position character class or zero-width class escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    AnyChar,         // .
    Digit,           // \d
    NonDigit,        // \D
    Word,            // \w
    NonWord,         // \W
    Whitespace,      // \s
    NonWhitespace,   // \S
    WordBoundary,    // \b
    NonWordBoundary, // \B
    Newline,         // \n
    CarriageReturn,  // \r
    Tab,             // \t
    NullByte,        // \0
}

impl ClassKind {
    /// Returns the pattern text for this class.
    #[must_use]
    pub const fn as_pattern(self) -> &'static str {
        match self {
            ClassKind::AnyChar => ".",
            ClassKind::Digit => r"\d",
            ClassKind::NonDigit => r"\D",
            ClassKind::Word => r"\w",
            ClassKind::NonWord => r"\W",
            ClassKind::Whitespace => r"\s",
            ClassKind::NonWhitespace => r"\S",
            ClassKind::WordBoundary => r"\b",
            ClassKind::NonWordBoundary => r"\B",
            ClassKind::Newline => r"\n",
            ClassKind::CarriageReturn => r"\r",
            ClassKind::Tab => r"\t",
            ClassKind::NullByte => r"\0",
        }
    }

    /// Maps the character following a `\` in a pattern to a class.
    ///
    /// `\0` is absent: a backslash followed by any digit reads as a
    /// backreference.
    #[must_use]
    pub const fn from_escape(c: char) -> Option<Self> {
        Some(match c {
            'd' => ClassKind::Digit,
            'D' => ClassKind::NonDigit,
            'w' => ClassKind::Word,
            'W' => ClassKind::NonWord,
            's' => ClassKind::Whitespace,
            'S' => ClassKind::NonWhitespace,
            'b' => ClassKind::WordBoundary,
            'B' => ClassKind::NonWordBoundary,
            'n' => ClassKind::Newline,
            'r' => ClassKind::CarriageReturn,
            't' => ClassKind::Tab,
            _ => return None,
        })
    }

    /// The name of the builder method producing this class.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            ClassKind::AnyChar => "any_char",
            ClassKind::Digit => "digit",
            ClassKind::NonDigit => "non_digit",
            ClassKind::Word => "word",
            ClassKind::NonWord => "non_word",
            ClassKind::Whitespace => "whitespace_char",
            ClassKind::NonWhitespace => "non_whitespace_char",
            ClassKind::WordBoundary => "word_boundary",
            ClassKind::NonWordBoundary => "non_word_boundary",
            ClassKind::Newline => "newline",
            ClassKind::CarriageReturn => "carriage_return",
            ClassKind::Tab => "tab",
            ClassKind::NullByte => "null_byte",
        }
    }
}
