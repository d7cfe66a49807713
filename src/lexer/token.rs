use crate::ast::{AssertionKind, ClassKind};

/// The kind of group opened by a `(` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `(`
    Capture,
    /// `(?:`
    NonCapture,
    /// `(?=`, `(?!`, `(?<=` or `(?<!`
    Assertion(AssertionKind),
}

/// The bounds of a repetition, as written in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub min: usize,
    pub max: Option<usize>,
    pub lazy: bool,
}

/// A pattern string token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A literal character, either written plainly or escaped by `\`.
    Literal(char),
    /// A class escape like `\d` or `\b`.
    Class(ClassKind),
    /// `.`
    Any,
    /// `^` outside a character set.
    Caret,
    /// `$`
    Dollar,
    /// `(`, `(?:` or a lookaround opener.
    Open(GroupKind),
    /// `)`
    RParen,
    /// `[` or `[^`.
    SetOpen { negated: bool },
    /// `]` closing a character set.
    SetClose,
    /// `-` inside a character set.
    Minus,
    /// `*`, `+`, `?` or `{n,m}`, each with an optional lazy `?`.
    Repeat(Repeat),
}

/// A [`Token`] with associated position information.
#[derive(Clone, Copy, Debug, Eq)]
pub struct PosToken {
    /// The start position of the token, as a byte offset.
    pub pos: usize,
    /// The token.
    pub token: Token,
}

impl core::ops::Deref for PosToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl PartialEq for PosToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
