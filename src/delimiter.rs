//! Splitting of a delimited regex literal (`/pattern/flags`) into its parts.

use super::{
    Error, Result, SyntaxError,
    flags::{Flag, Flags},
};

/// Characters accepted as the delimiter of a regex literal.
pub const DELIMITERS: [char; 7] = ['/', '#', '~', '@', ';', '%', '`'];

/// The parts of a regex literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimited<'a> {
    /// The delimiter character.
    pub delimiter: char,
    /// The text between the delimiters.
    pub pattern: &'a str,
    /// The byte offset of `pattern` within the literal.
    pub offset: usize,
    /// The flags after the closing delimiter.
    pub flags: Flags,
}

impl<'a> Delimited<'a> {
    /// Splits `input` into delimiter, pattern and flags.
    ///
    /// The pattern ends at the *last* occurrence of the delimiter, so the
    /// delimiter may appear unescaped inside the pattern.
    ///
    /// # Errors
    ///
    /// An [`Error::Syntax`] is returned if the literal is shorter than two
    /// characters, starts with an unsupported delimiter, lacks a closing
    /// delimiter, or has unknown or repeated flags.
    pub fn split(input: &'a str) -> Result<Self> {
        let error = |pos, kind| Error::Syntax {
            input: input.to_owned(),
            pos,
            kind,
        };

        let mut chars = input.chars();
        let (Some(delimiter), Some(_)) = (chars.next(), chars.next()) else {
            return Err(error(0, SyntaxError::TooShort));
        };

        if !DELIMITERS.contains(&delimiter) {
            return Err(error(0, SyntaxError::InvalidDelimiter(delimiter)));
        }

        let offset = delimiter.len_utf8();
        let Some(end) = input[offset..].rfind(delimiter).map(|end| end + offset) else {
            return Err(error(input.len(), SyntaxError::MissingDelimiter));
        };

        let flags_start = end + delimiter.len_utf8();
        let mut flags = Flags::new();
        for (i, c) in input[flags_start..].char_indices() {
            let pos = flags_start + i;
            let Some(flag) = Flag::from_char(c) else {
                return Err(error(pos, SyntaxError::UnknownFlag(c)));
            };
            if flags.contains(flag) {
                return Err(error(pos, SyntaxError::DuplicateFlag(c)));
            }
            flags.insert(flag);
        }

        Ok(Delimited {
            delimiter,
            pattern: &input[offset..end],
            offset,
            flags,
        })
    }
}
