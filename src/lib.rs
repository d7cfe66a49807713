//! A fluent regular expression builder, and a translator from regex literals
//! back to the builder calls that produce them.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::too_many_lines)]

pub mod ast;
pub mod builder;
pub mod charset;
pub mod codegen;
pub mod delimiter;
pub mod eval;
pub mod flags;
pub mod lexer;
pub mod parser;

pub use self::{
    ast::{AstNode, AstRoot, Quantifier},
    builder::{FrameKind, RegexBuilder, SubexpressionOptions},
    charset::CharSet,
    codegen::Program,
    flags::{Flag, Flags},
    lexer::{Lexer, Token},
    parser::parse,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A regex literal could not be read.
    #[error("{kind} at position {pos}")]
    Syntax {
        input: String,
        pos: usize,
        kind: SyntaxError,
    },

    /// A builder call was given an argument it cannot use.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// A quantifier call was made while another was still waiting for an
    /// element.
    #[error(
        "cannot quantify regular expression with \"{requested}\" because it's already being quantified with \"{pending}\""
    )]
    QuantifierConflict {
        pending: Quantifier,
        requested: Quantifier,
    },

    /// `end()` was called with no open container.
    #[error("cannot call end() while building the root expression")]
    UnbalancedEnd,

    /// A capture group name is empty or not made of letters, digits and
    /// underscores starting with a letter.
    #[error("name \"{0}\" is not valid (only letters, numbers, and underscores)")]
    InvalidName(String),

    /// A capture group name was used twice.
    #[error("cannot use \"{0}\" again for a capture group")]
    DuplicateName(String),

    /// A named backreference refers to a group that does not exist.
    #[error("no capture group called \"{0}\" exists (create one with named_capture())")]
    UnknownGroup(String),

    #[error("{0}")]
    DuplicateAnchor(AnchorConflict),

    /// The pattern was rendered while a container was still open.
    #[error(
        "cannot compute the value of a not yet fully specified regex object (try adding an end() call to match the \"{0}\")"
    )]
    IncompleteExpression(FrameKind),

    /// A builder with an open container was used as a subexpression.
    #[error(
        "cannot call subexpression with a not yet fully specified regex object (try adding an end() call to match the \"{0}\" on the subexpression)"
    )]
    NotFullyClosed(FrameKind),

    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// Reasons a regex literal is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid regex: too short")]
    TooShort,
    #[error("invalid delimiter '{0}'")]
    InvalidDelimiter(char),
    #[error("missing closing delimiter")]
    MissingDelimiter,
    #[error("unknown flag '{0}'")]
    UnknownFlag(char),
    #[error("duplicate flag '{0}'")]
    DuplicateFlag(char),
    #[error("incomplete escape sequence")]
    IncompleteEscape,
    #[error("unclosed character set")]
    UnclosedSet,
    #[error("empty character set")]
    EmptySet,
    #[error(transparent)]
    CharSet(#[from] charset::Error),
    #[error("invalid quantifier: {0}")]
    InvalidQuantifier(&'static str),
    #[error("unexpected quantifier without preceding element")]
    NothingToRepeat,
    #[error("unmatched ')'")]
    UnmatchedParen,
    #[error("unclosed group")]
    UnclosedGroup,
    #[error("{0} not supported")]
    Unsupported(Unsupported),
}

/// Constructs the parser recognises but deliberately refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Unsupported {
    #[error("alternation (|) outside of any_of is")]
    Alternation,
    #[error("backreferences are")]
    Backreference,
    #[error("named groups and other (? extensions are")]
    Group,
    #[error("class escapes inside a character set are")]
    ClassInSet,
    #[error("negated character sets mixing ranges and characters are")]
    NegatedSet,
    #[error("lazy open-ended quantifiers other than *? and +? are")]
    LazyAtLeast,
}

/// Reasons a builder call rejects its arguments.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("char() can only be called with a single character (got \"{0}\")")]
    NotAChar(String),
    #[error("range bounds must be single characters (got \"{0}\")")]
    RangeBound(String),
    #[error(transparent)]
    Range(#[from] charset::Error),
    #[error("{name} must be a positive integer (got {value})")]
    NotPositive { name: &'static str, value: usize },
    #[error("x must be less than y (x = {x}, y = {y})")]
    BetweenOrder { x: usize, y: usize },
    #[error("{0} cannot be an empty string")]
    Empty(&'static str),
    #[error("invalid index {index}. There are {groups} capture groups on this expression")]
    Backreference { index: usize, groups: usize },
}

/// Ways an anchor call can clash with anchors already placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnchorConflict {
    #[error("this regex already has a defined start of input")]
    Start,
    #[error("cannot define the start of input after the end of input")]
    StartAfterEnd,
    #[error("this regex already has a defined end of input")]
    End,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Translates a regex literal into the builder calls that reproduce it.
///
/// # Errors
///
/// If the literal cannot be parsed, an [`Error::Syntax`] is returned.
pub fn to_builder_source(literal: &str) -> Result<String> {
    Ok(Program::from_ast(&parse(literal)?)?.to_string())
}
