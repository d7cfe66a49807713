use super::{super::CharSet, ClassKind, Literal, Quantifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start, // ^
    End,   // $
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    Ahead,     // (?=...)
    NotAhead,  // (?!...)
    Behind,    // (?<=...)
    NotBehind, // (?<!...)
}

impl AssertionKind {
    /// The opening syntax of the assertion group.
    #[must_use]
    pub const fn opener(self) -> &'static str {
        match self {
            AssertionKind::Ahead => "(?=",
            AssertionKind::NotAhead => "(?!",
            AssertionKind::Behind => "(?<=",
            AssertionKind::NotBehind => "(?<!",
        }
    }

    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            AssertionKind::Ahead => "assert_ahead",
            AssertionKind::NotAhead => "assert_not_ahead",
            AssertionKind::Behind => "assert_behind",
            AssertionKind::NotBehind => "assert_not_behind",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum AstNode {
    /// Renders as nothing. Stands in for anchors dropped by a subexpression
    /// merge.
    Noop,

    // Anchors (zero-width assertions)
    Anchor(Anchor),

    Class(ClassKind), // \d, \w, ., \b ...

    // Literals
    Char(Literal),   // exactly one character
    String(Literal), // one or more characters

    Set(CharSet),                  // [...] or [^...] read by the parser
    Range(char, char),             // [a-z]
    AnythingButRange(char, char),  // [^a-z]
    AnyOfChars(Literal),           // [abc]
    AnythingButChars(Literal),     // [^abc]
    AnythingButString(Vec<Literal>), // (?:[^a][^b][^c]), one literal per character

    // Containers
    Group {
        capturing: bool,
        children: Vec<AstNode>,
    },
    NamedGroup {
        name: String,
        children: Vec<AstNode>,
    },
    Assertion {
        kind: AssertionKind,
        children: Vec<AstNode>,
    },
    AnyOf(Vec<AstNode>),
    Subexpression(Vec<AstNode>),

    // Capture references, 1-based
    Backreference(usize),
    NamedBackreference(String),

    // Quantified items
    Quantified {
        inner: Box<AstNode>, // The node being quantified
        quantifier: Quantifier,
    },
}

impl AstNode {
    /// Returns `true` if the node matches no input, and so can never carry a
    /// quantifier.
    #[must_use]
    pub fn is_zero_width(&self) -> bool {
        matches!(self, AstNode::Anchor(_) | AstNode::Assertion { .. })
    }

    /// Returns `true` if the node renders as more than one atom and needs a
    /// non-capturing group before a quantifier can apply to all of it.
    #[must_use]
    pub fn needs_group(&self) -> bool {
        match self {
            AstNode::String(lit) => lit.is_multi_char(),
            AstNode::Subexpression(_) => true,
            _ => false,
        }
    }
}
